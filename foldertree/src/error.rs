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

use core::fmt;

/// The fixed error taxonomy surfaced by every tree operation.
///
/// This is deliberately a flat, closed enum rather than something built on
/// `thiserror`: there's no wrapped source error to format here (no I/O, no parse
/// failure from another crate), just a handful of named outcomes -- the same shape
/// as `corestore::memstore::DdlError` elsewhere in this codebase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeError {
    /// The path string is empty or doesn't match the `(/component)+/` grammar.
    InvalidArgument,
    /// Some component on the path -- or the target itself -- doesn't exist.
    NotFound,
    /// The terminal component is already a child of its parent, or the operation
    /// targets the root where that's disallowed (`create("/")`, `move(x, "/")`).
    AlreadyExists,
    /// `remove` was asked to remove a folder that still has children.
    NotEmpty,
    /// The operation targets the root where that's disallowed (`remove("/")`,
    /// `move("/", _)`).
    Busy,
    /// `move` would place a folder inside its own subtree.
    IllegalMove,
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::InvalidArgument => "invalid argument: malformed path",
            Self::NotFound => "no such folder",
            Self::AlreadyExists => "folder already exists",
            Self::NotEmpty => "folder is not empty",
            Self::Busy => "operation not permitted on the root",
            Self::IllegalMove => "cannot move a folder into its own subtree",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for TreeError {}

pub type TreeResult<T> = Result<T, TreeError>;
