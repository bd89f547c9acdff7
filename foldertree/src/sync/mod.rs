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

//! Synchronization primitives that the rest of the crate is built on.
//!
//! We don't reach for `std`'s or `parking_lot`'s `RwLock` here: neither gives us the
//! exact fairness guarantee we need (alternating reader/writer batches with no
//! starvation), so -- as elsewhere in this kind of codebase -- we roll our own.

pub(crate) mod monitor;
