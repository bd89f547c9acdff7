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

//! `move`: the two-phase, LCA-barriered relocation of a subtree.
//!
//! Every other operation is a single hand-over-hand walk. `move` needs two,
//! rooted at a shared ancestor held as writer for the duration of both, so
//! that no concurrent operation can restructure either endpoint's parent
//! chain mid-rename. See the module docs on [`ParentHandle`] for how the
//! edge cases where that shared ancestor *is* one of the two parents are
//! handled without re-entering a monitor that's already held.

use crate::error::{TreeError, TreeResult};
use crate::node::{FolderNode, WriterGuard};
use crate::path;

/// A parent folder reference obtained one of two ways during a move:
///
/// - [`ParentHandle::Lca`]: the parent *is* the LCA node, already held as
///   writer by the caller. No separate guard exists for it -- acquiring one
///   would block forever on the monitor we're already holding.
/// - [`ParentHandle::Owned`]: the parent is strictly inside the LCA's
///   subtree, reached by an independent hand-over-hand descent from the LCA
///   and held through its own [`WriterGuard`].
///
/// Both variants expose the same raw child-map operations (see
/// [`FolderNode::raw_get_child`] and friends), so the rest of the algorithm
/// doesn't need to know which case it's in.
enum ParentHandle<'a> {
    Lca(&'a FolderNode),
    Owned(WriterGuard<'a>),
}

impl<'a> ParentHandle<'a> {
    fn node(&self) -> &FolderNode {
        match self {
            ParentHandle::Lca(node) => node,
            ParentHandle::Owned(guard) => guard.node(),
        }
    }
}

/// Descends from `lca` (already held as writer) to the writer-held parent
/// folder named by `components`, hand-over-hand, with interior nodes visited
/// as readers. An empty `components` means the parent *is* `lca` itself, in
/// which case no new guard is created at all.
///
/// The first step reaches into `lca`'s child map directly (via
/// [`FolderNode::raw_get_child`]) rather than through a `ReaderGuard`: `lca`
/// is already held as writer by the caller, and a monitor isn't reentrant, so
/// this raw read is what stands in for "the writer we're already holding
/// covers this lookup too".
fn descend_from_lca<'a>(
    lca: &'a FolderNode,
    components: &[&str],
) -> TreeResult<ParentHandle<'a>> {
    let Some((first, rest)) = components.split_first() else {
        return Ok(ParentHandle::Lca(lca));
    };
    let first_child = lca.raw_get_child(first).ok_or(TreeError::NotFound)?;
    let Some((last, interior)) = rest.split_last() else {
        return Ok(ParentHandle::Owned(first_child.write()));
    };
    let mut current = first_child.read();
    for name in interior {
        let child = current.get_child(name).ok_or(TreeError::NotFound)?;
        current = child.read();
    }
    let target = current.get_child(last).ok_or(TreeError::NotFound)?;
    let writer = target.write();
    drop(current);
    Ok(ParentHandle::Owned(writer))
}

/// Atomically re-parents the subtree rooted at `source` so it is reachable
/// as `target` instead.
///
/// Walks from the root as reader down to the lowest common ancestor of
/// `source`'s parent and `target`'s parent, acquires that folder as writer
/// (the barrier excluding any concurrent structural change to either parent
/// chain), then performs two independent hand-over-hand descents within its
/// subtree to reach the two parents.
pub(crate) fn mv(root: &FolderNode, source: &str, target: &str) -> TreeResult<()> {
    path::validate(source)?;
    path::validate(target)?;

    if source == "/" {
        return Err(TreeError::Busy);
    }
    if target == "/" {
        return Err(TreeError::AlreadyExists);
    }
    if path::is_prefix_path(source, target) {
        return Err(TreeError::IllegalMove);
    }

    let (source_ancestors, source_name) = path::split_parent_and_name(source);
    let (target_ancestors, target_name) = path::split_parent_and_name(target);

    // the LCA of the two parent chains is the longest common prefix of
    // `source_ancestors` and `target_ancestors`
    let lca_depth = source_ancestors
        .iter()
        .zip(target_ancestors.iter())
        .take_while(|(a, b)| a == b)
        .count();

    // Escalate to writer on the LCA candidate *before* releasing the reader on
    // its own parent -- mirroring `descend_from_lca`'s first step below. There
    // is no atomic reader-to-writer upgrade, so if we dropped a reader held on
    // the LCA itself and only then called `.write()` on it, a concurrent
    // remove could detach-and-free that exact node in the gap between the two
    // calls, and `.write()` would dereference freed memory. Holding the
    // *parent* as reader throughout excludes that: removing the LCA requires
    // the parent as writer, which our reader blocks until we've safely
    // escalated.
    let lca_writer = if lca_depth == 0 {
        // the LCA is the root itself, which has no parent and is never freed
        // for the lifetime of this call, so there is nothing to shield.
        root.write()
    } else {
        let mut current = root.read();
        for name in &source_ancestors[..lca_depth - 1] {
            let child = current.get_child(name).ok_or(TreeError::NotFound)?;
            current = child.read();
        }
        let lca_node = current
            .get_child(source_ancestors[lca_depth - 1])
            .ok_or(TreeError::NotFound)?;
        let writer = lca_node.write();
        drop(current);
        writer
    };
    let lca = lca_writer.node();

    let source_parent = descend_from_lca(lca, &source_ancestors[lca_depth..])?;
    let target_parent = descend_from_lca(lca, &target_ancestors[lca_depth..])?;

    // check the target name is free *before* detaching anything, so a
    // rejected move never has to undo a detach -- the whole operation
    // either fully succeeds or leaves the tree exactly as it was.
    if target_parent.node().raw_get_child(target_name).is_some() {
        return Err(TreeError::AlreadyExists);
    }

    let moved = source_parent
        .node()
        .raw_take_child(source_name)
        .ok_or(TreeError::NotFound)?;

    let attached = target_parent.node().raw_attach_child(target_name, moved);
    assert!(
        attached,
        "move target name became occupied under the LCA writer shield -- \
         the already-detached source subtree would otherwise be silently dropped"
    );

    log::trace!("move: relocated {source} to {target}");
    drop(source_parent);
    drop(target_parent);
    drop(lca_writer);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::create::create;
    use crate::ops::list::list;

    #[test]
    fn renames_under_shared_parent() {
        let root = FolderNode::new();
        create(&root, "/a/").unwrap();
        create(&root, "/b/").unwrap();
        assert_eq!(mv(&root, "/a/", "/c/"), Ok(()));
        assert_eq!(list(&root, "/"), Ok("b,c".to_owned()));
    }

    #[test]
    fn moves_into_sibling_subtree() {
        let root = FolderNode::new();
        create(&root, "/a/").unwrap();
        create(&root, "/b/").unwrap();
        assert_eq!(mv(&root, "/a/", "/b/a/"), Ok(()));
        assert_eq!(list(&root, "/"), Ok("b".to_owned()));
        assert_eq!(list(&root, "/b/"), Ok("a".to_owned()));
    }

    #[test]
    fn preserves_descendants_and_their_structure() {
        let root = FolderNode::new();
        create(&root, "/a/").unwrap();
        create(&root, "/a/c/").unwrap();
        create(&root, "/a/c/d/").unwrap();
        create(&root, "/b/").unwrap();
        assert_eq!(mv(&root, "/a/c/", "/b/c/"), Ok(()));
        assert_eq!(list(&root, "/b/c/"), Ok("d".to_owned()));
    }

    #[test]
    fn rejects_move_of_root() {
        let root = FolderNode::new();
        assert_eq!(mv(&root, "/", "/a/"), Err(TreeError::Busy));
    }

    #[test]
    fn rejects_move_onto_root() {
        let root = FolderNode::new();
        create(&root, "/a/").unwrap();
        assert_eq!(mv(&root, "/a/", "/"), Err(TreeError::AlreadyExists));
    }

    #[test]
    fn rejects_move_onto_itself_as_already_exists_not_illegal_move() {
        // source == target is a name conflict, not a subtree violation: the
        // terminal name is (trivially) already taken under the target parent.
        let root = FolderNode::new();
        create(&root, "/a/").unwrap();
        assert_eq!(mv(&root, "/a/", "/a/"), Err(TreeError::AlreadyExists));
    }

    #[test]
    fn rejects_move_into_own_subtree() {
        let root = FolderNode::new();
        create(&root, "/a/").unwrap();
        create(&root, "/a/b/").unwrap();
        assert_eq!(mv(&root, "/a/", "/a/b/x/"), Err(TreeError::IllegalMove));
    }

    #[test]
    fn rejects_missing_source() {
        let root = FolderNode::new();
        create(&root, "/b/").unwrap();
        assert_eq!(mv(&root, "/a/", "/b/a/"), Err(TreeError::NotFound));
    }

    #[test]
    fn rejects_existing_target_name() {
        let root = FolderNode::new();
        create(&root, "/a/").unwrap();
        create(&root, "/b/").unwrap();
        create(&root, "/b/a/").unwrap();
        assert_eq!(mv(&root, "/a/", "/b/a/"), Err(TreeError::AlreadyExists));
        // source must still be in place: the attempted move was fully rolled back
        assert_eq!(list(&root, "/"), Ok("a,b".to_owned()));
    }

    #[test]
    fn round_trip_restores_tree() {
        let root = FolderNode::new();
        create(&root, "/a/").unwrap();
        create(&root, "/b/").unwrap();
        mv(&root, "/a/", "/b/a/").unwrap();
        mv(&root, "/b/a/", "/a/").unwrap();
        assert_eq!(list(&root, "/"), Ok("a,b".to_owned()));
        assert_eq!(list(&root, "/b/"), Ok(String::new()));
    }
}
