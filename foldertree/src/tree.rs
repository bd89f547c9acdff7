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

use crate::error::TreeResult;
use crate::node::FolderNode;
use crate::ops;

/// A concurrent in-memory hierarchical folder namespace, rooted at `/`.
///
/// Every operation is safe to call from any number of threads at once: each
/// folder serializes access to itself through a fair readers/writers monitor
/// (see [`crate::sync::monitor`]), and hand-over-hand traversal means unrelated
/// subtrees never contend with each other.
///
/// There is no explicit `free`/`destroy` call -- dropping the `Tree` recursively
/// drops every folder still in it, the same way the reference implementation's
/// `tree_free` walked the whole structure, except here it falls out of ordinary
/// ownership instead of a hand-written recursive free.
#[derive(Debug, Default)]
pub struct Tree {
    root: Box<FolderNode>,
}

impl Tree {
    /// Creates a new tree containing a single, empty root folder `/`.
    pub fn new() -> Self {
        Self {
            root: Box::new(FolderNode::new()),
        }
    }

    /// Creates a new, empty folder at `path`.
    ///
    /// # Errors
    /// - [`TreeError::InvalidArgument`](crate::error::TreeError::InvalidArgument) if `path` is malformed.
    /// - [`TreeError::AlreadyExists`](crate::error::TreeError::AlreadyExists) if `path` is `/`, or a folder already exists there.
    /// - [`TreeError::NotFound`](crate::error::TreeError::NotFound) if some ancestor of `path` doesn't exist.
    pub fn create(&self, path: &str) -> TreeResult<()> {
        ops::create::create(&self.root, path)
    }

    /// Returns the immediate children of the folder at `path`, comma-separated,
    /// in no particular order (empty string if it has none).
    ///
    /// # Errors
    /// - [`TreeError::InvalidArgument`](crate::error::TreeError::InvalidArgument) if `path` is malformed.
    /// - [`TreeError::NotFound`](crate::error::TreeError::NotFound) if `path` doesn't resolve.
    pub fn list(&self, path: &str) -> TreeResult<String> {
        ops::list::list(&self.root, path)
    }

    /// Removes the (empty) folder at `path`.
    ///
    /// # Errors
    /// - [`TreeError::InvalidArgument`](crate::error::TreeError::InvalidArgument) if `path` is malformed.
    /// - [`TreeError::Busy`](crate::error::TreeError::Busy) if `path` is `/`.
    /// - [`TreeError::NotFound`](crate::error::TreeError::NotFound) if `path` doesn't resolve.
    /// - [`TreeError::NotEmpty`](crate::error::TreeError::NotEmpty) if the folder has children.
    pub fn remove(&self, path: &str) -> TreeResult<()> {
        ops::remove::remove(&self.root, path)
    }

    /// Atomically moves the subtree rooted at `source` so it is reachable as
    /// `target` instead, preserving the identity (and every descendant's
    /// monitor) of every folder in that subtree.
    ///
    /// # Errors
    /// - [`TreeError::InvalidArgument`](crate::error::TreeError::InvalidArgument) if either path is malformed.
    /// - [`TreeError::Busy`](crate::error::TreeError::Busy) if `source` is `/`.
    /// - [`TreeError::AlreadyExists`](crate::error::TreeError::AlreadyExists) if `target` is `/`, or its terminal name already exists under its parent.
    /// - [`TreeError::NotFound`](crate::error::TreeError::NotFound) if either parent chain breaks, or `source` doesn't exist.
    /// - [`TreeError::IllegalMove`](crate::error::TreeError::IllegalMove) if `target` lies inside `source`'s own subtree.
    pub fn mv(&self, source: &str, target: &str) -> TreeResult<()> {
        ops::move_op::mv(&self.root, source, target)
    }
}
