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

//! The four public operations, each composing the path walker with a terminal
//! action. `create`/`list`/`remove` share [`crate::walk`]; `move` is large enough,
//! and different enough (two independent walks under an LCA barrier), to get its
//! own module.

pub(crate) mod create;
pub(crate) mod list;
pub(crate) mod move_op;
pub(crate) mod remove;
