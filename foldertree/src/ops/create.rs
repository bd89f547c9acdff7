/*
 * Created on Thu Jul 31 2025
 *
 * This file is a part of Foldertree
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 *
*/

use crate::error::{TreeError, TreeResult};
use crate::node::FolderNode;
use crate::path;
use crate::walk::walk_to_writer;

/// Ancestors of the terminal's parent are visited as readers; the parent itself
/// is the sole writer, under which the new child is inserted.
pub(crate) fn create(root: &FolderNode, path: &str) -> TreeResult<()> {
    path::validate(path)?;
    if path == "/" {
        return Err(TreeError::AlreadyExists);
    }

    let (ancestors, name) = path::split_parent_and_name(path);
    let parent = walk_to_writer(root, &ancestors)?;

    if parent.insert_new(name, FolderNode::new()) {
        log::trace!("create: inserted {path}");
        Ok(())
    } else {
        Err(TreeError::AlreadyExists)
    }
}
