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

/// Every proper ancestor is visited as a reader, the parent of the terminal
/// folder is acquired as a writer, and the entry is removed from its map under
/// that shield.
///
/// The terminal folder itself is never separately entered as reader or writer:
/// the parent-writer shield already guarantees no other thread can be inside it,
/// so its child count can be read directly (see [`FolderNode::raw_child_count`]).
pub(crate) fn remove(root: &FolderNode, path: &str) -> TreeResult<()> {
    path::validate(path)?;
    if path == "/" {
        return Err(TreeError::Busy);
    }

    let (ancestors, name) = path::split_parent_and_name(path);
    let parent = walk_to_writer(root, &ancestors)?;

    let target = parent.get_child(name).ok_or(TreeError::NotFound)?;
    if target.raw_child_count() != 0 {
        return Err(TreeError::NotEmpty);
    }

    let detached = parent.take_child(name);
    assert!(
        detached.is_some(),
        "target folder vanished under the parent's own writer shield -- \
         would otherwise silently report success without removing anything"
    );
    log::trace!("remove: detached {path}");
    Ok(())
}
