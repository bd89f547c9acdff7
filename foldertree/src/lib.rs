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

//! # Foldertree
//!
//! A concurrent in-memory hierarchical folder namespace. The tree is rooted
//! at `/` and supports four operations -- `create`, `list`, `remove`, `mv`
//! (`move` is a reserved word) -- each safe to call from any number of
//! threads at once.
//!
//! Every folder arbitrates access to its own children through a fair
//! readers/writers [`sync::monitor`], and every walk down the tree acquires a
//! child before releasing its parent ("hand-over-hand locking"), so unrelated
//! subtrees never contend with each other. `mv` additionally barriers on the
//! lowest common ancestor of its source and target parents before descending
//! into either side, which is the one place two paths have to be
//! synchronized against each other at once.
//!
//! This crate models structure only: a folder carries no file contents, no
//! metadata, and nothing here is persisted -- the whole tree lives for as
//! long as the owning [`Tree`] does.

mod error;
mod node;
mod ops;
mod path;
mod sync;
mod tree;
mod walk;

pub use error::{TreeError, TreeResult};
pub use tree::Tree;
