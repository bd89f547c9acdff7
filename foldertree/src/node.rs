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

//! The tree node itself: a child map guarded by a [`FairRwMonitor`].
//!
//! A folder carries no data of its own -- this crate models structure, not file
//! contents -- so a [`FolderNode`] is nothing but its children and the monitor that
//! arbitrates access to them.

use crate::sync::monitor::FairRwMonitor;
use std::cell::UnsafeCell;
use std::collections::HashMap;

/// A folder. Owned exclusively by its parent's child map (or by the [`crate::Tree`]
/// handle, for the root).
///
/// The child map lives behind an [`UnsafeCell`] rather than a `Mutex`: mutual
/// exclusion is already provided by `monitor`, one level up, so a second lock here
/// would just be redundant bookkeeping. Every access to `children` is required to
/// go through a [`ReaderGuard`] or [`WriterGuard`], which is the only thing in this
/// module permitted to dereference the cell.
#[derive(Debug, Default)]
pub(crate) struct FolderNode {
    monitor: FairRwMonitor,
    children: UnsafeCell<HashMap<String, Box<FolderNode>>>,
}

// UNSAFE(@foldertree): `children` is only ever touched through a `ReaderGuard`
// (shared access) or `WriterGuard` (exclusive access), both of which are granted
// by `monitor`'s mutually-exclusive reader/writer discipline. That discipline is
// what makes concurrent access to the cell sound, not anything the compiler can
// see through `UnsafeCell` on its own.
unsafe impl Sync for FolderNode {}

impl FolderNode {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn read(&self) -> ReaderGuard<'_> {
        ReaderGuard::new(self)
    }

    pub(crate) fn write(&self) -> WriterGuard<'_> {
        WriterGuard::new(self)
    }

    /// Reads this folder's child count without entering its own monitor.
    ///
    /// Only valid while the caller already holds this folder's *parent* as a
    /// writer: that shield is what guarantees no other thread has entered this
    /// folder, which is what `remove` relies on instead of separately acquiring
    /// (and immediately releasing) this node's own reader/writer protocol -- see
    /// the open question in the design notes.
    pub(crate) fn raw_child_count(&self) -> usize {
        // UNSAFE(@foldertree): sound only under the parent-writer shield described
        // above; the caller is responsible for holding it.
        unsafe { &*self.children.get() }.len()
    }

    /// The raw, monitor-bypassing child map operations that back both
    /// [`WriterGuard`] and the handful of `move` edge cases (§4.7) where a
    /// "parent" is the already-writer-held LCA itself, so a second `WriterGuard`
    /// can't be created for it without deadlocking against the one we're already
    /// holding. Every caller of these is responsible for already holding this
    /// folder as a writer -- either through a live [`WriterGuard`], or because it
    /// *is* the LCA node an outer `WriterGuard` was built from.
    pub(crate) fn raw_get_child(&self, name: &str) -> Option<&FolderNode> {
        // UNSAFE(@foldertree): shared access permitted by the writer invariant above.
        let children = unsafe { &*self.children.get() };
        children.get(name).map(|child| child.as_ref())
    }

    pub(crate) fn raw_child_names(&self) -> Vec<&str> {
        // UNSAFE(@foldertree): shared access permitted by the writer invariant above.
        let children = unsafe { &*self.children.get() };
        children.keys().map(String::as_str).collect()
    }

    pub(crate) fn raw_insert_new(&self, name: &str, child: FolderNode) -> bool {
        // UNSAFE(@foldertree): exclusive access permitted by the writer invariant above.
        let children = unsafe { &mut *self.children.get() };
        if children.contains_key(name) {
            return false;
        }
        children.insert(name.to_owned(), Box::new(child));
        true
    }

    pub(crate) fn raw_take_child(&self, name: &str) -> Option<Box<FolderNode>> {
        // UNSAFE(@foldertree): exclusive access permitted by the writer invariant above.
        let children = unsafe { &mut *self.children.get() };
        children.remove(name)
    }

    pub(crate) fn raw_attach_child(&self, name: &str, child: Box<FolderNode>) -> bool {
        // UNSAFE(@foldertree): exclusive access permitted by the writer invariant above.
        let children = unsafe { &mut *self.children.get() };
        if children.contains_key(name) {
            return false;
        }
        children.insert(name.to_owned(), child);
        true
    }
}

/// Read (shared) access to a [`FolderNode`], granted by its monitor.
///
/// Held only transiently during hand-over-hand traversal, except for the terminal
/// node of `list`, which is held for the duration of building the result string so
/// that the listing reflects one consistent snapshot.
pub(crate) struct ReaderGuard<'a> {
    node: &'a FolderNode,
}

impl<'a> ReaderGuard<'a> {
    fn new(node: &'a FolderNode) -> Self {
        node.monitor.enter_reader();
        Self { node }
    }

    /// Looks up a child by name. The returned reference is tied to the *node's*
    /// lifetime, not this guard's: the child folder is owned by `self.node` and
    /// stays alive for as long as `self.node` does, regardless of how long this
    /// particular reader permission is held for.
    ///
    /// Handing out `&'a FolderNode` here is only sound because of hand-over-hand
    /// discipline: the caller must register on the child's own monitor (via
    /// `child.read()`/`child.write()`) *before* dropping this guard, so the parent
    /// link can't be rewritten out from under the lookup in between.
    pub(crate) fn get_child(&self, name: &str) -> Option<&'a FolderNode> {
        // UNSAFE(@foldertree): shared access permitted by an active reader guard.
        let children = unsafe { &*self.node.children.get() };
        children.get(name).map(|child| child.as_ref())
    }

    pub(crate) fn child_names(&self) -> Vec<&'a str> {
        // UNSAFE(@foldertree): shared access permitted by an active reader guard.
        let children = unsafe { &*self.node.children.get() };
        children.keys().map(String::as_str).collect()
    }

    pub(crate) fn child_count(&self) -> usize {
        // UNSAFE(@foldertree): shared access permitted by an active reader guard.
        unsafe { &*self.node.children.get() }.len()
    }

    pub(crate) fn node(&self) -> &'a FolderNode {
        self.node
    }
}

impl Drop for ReaderGuard<'_> {
    fn drop(&mut self) {
        self.node.monitor.exit_reader();
    }
}

/// Exclusive (write) access to a [`FolderNode`], granted by its monitor.
pub(crate) struct WriterGuard<'a> {
    node: &'a FolderNode,
}

impl<'a> WriterGuard<'a> {
    fn new(node: &'a FolderNode) -> Self {
        node.monitor.enter_writer();
        Self { node }
    }

    pub(crate) fn get_child(&self, name: &str) -> Option<&'a FolderNode> {
        self.node.raw_get_child(name)
    }

    pub(crate) fn child_count(&self) -> usize {
        self.node.raw_child_count()
    }

    pub(crate) fn child_names(&self) -> Vec<&'a str> {
        self.node.raw_child_names()
    }

    /// Inserts a freshly created child folder. Returns `false` (and leaves the map
    /// untouched) if a child of that name already exists.
    pub(crate) fn insert_new(&self, name: &str, child: FolderNode) -> bool {
        self.node.raw_insert_new(name, child)
    }

    /// Detaches and returns a child folder by name, if present.
    pub(crate) fn take_child(&self, name: &str) -> Option<Box<FolderNode>> {
        self.node.raw_take_child(name)
    }

    /// Re-parents `child` under this folder as `name`. Returns `false` (without
    /// touching the map) if the name is already taken.
    pub(crate) fn attach_child(&self, name: &str, child: Box<FolderNode>) -> bool {
        self.node.raw_attach_child(name, child)
    }

    pub(crate) fn node(&self) -> &'a FolderNode {
        self.node
    }
}

impl Drop for WriterGuard<'_> {
    fn drop(&mut self) {
        self.node.monitor.exit_writer();
    }
}
