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

//! The hand-over-hand path walker shared by `create`, `list`, and `remove`.
//!
//! `move` needs a two-phase walk of its own (the LCA barrier) and is implemented
//! directly in `ops::move_op` instead of through these helpers.

use crate::error::TreeError;
use crate::node::{FolderNode, ReaderGuard, WriterGuard};

/// Walks every component as a reader, hand-over-hand, and returns the terminal
/// node still held as a reader. `components` empty means "the root itself".
///
/// Used by `list`, which needs the whole path -- including the terminal folder --
/// visited purely as a reader.
pub(crate) fn walk_reader_chain<'a>(
    root: &'a FolderNode,
    components: &[&str],
) -> Result<ReaderGuard<'a>, TreeError> {
    let mut current = root.read();
    for name in components {
        let child = current.get_child(name).ok_or(TreeError::NotFound)?;
        // acquire the child before releasing the parent
        let next = child.read();
        current = next;
    }
    Ok(current)
}

/// Walks `components` as readers, hand-over-hand, and returns the *last* node on
/// that path held as a writer. An empty `components` means the writer is taken on
/// `root` directly, with no reader step at all.
///
/// Used by `create` and `remove`, where `components` is the path to the target's
/// parent: every ancestor of that parent is a reader, and the parent itself is the
/// sole writer.
pub(crate) fn walk_to_writer<'a>(
    root: &'a FolderNode,
    components: &[&str],
) -> Result<WriterGuard<'a>, TreeError> {
    let Some((last, ancestors)) = components.split_last() else {
        return Ok(root.write());
    };
    let mut current = root.read();
    for name in ancestors {
        let child = current.get_child(name).ok_or(TreeError::NotFound)?;
        let next = child.read();
        current = next;
    }
    let target = current.get_child(last).ok_or(TreeError::NotFound)?;
    let writer = target.write();
    drop(current);
    Ok(writer)
}
