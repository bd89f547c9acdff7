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

//! Single-threaded, end-to-end scenarios: a long driver sequence exercising
//! every operation and error kind in turn, plus the boundary cases and
//! worked examples from the design notes.

use foldertree::{Tree, TreeError};

#[test]
fn scenario_one_matches_the_reference_driver() {
    let tree = Tree::new();
    assert_eq!(tree.list("/"), Ok(String::new()));
    assert_eq!(tree.list("/a/"), Err(TreeError::NotFound));
    assert_eq!(tree.create("/a/"), Ok(()));
    assert_eq!(tree.create("/a/b/"), Ok(()));
    assert_eq!(tree.create("/a/b/"), Err(TreeError::AlreadyExists));
    assert_eq!(tree.create("/a/b/c/d/"), Err(TreeError::NotFound));
    assert_eq!(tree.remove("/a/"), Err(TreeError::NotEmpty));
    assert_eq!(tree.create("/b/"), Ok(()));
    assert_eq!(tree.create("/a/c/"), Ok(()));
    assert_eq!(tree.create("/a/c/d/"), Ok(()));
    assert_eq!(tree.mv("/a/c/", "/b/c/"), Ok(()));
    assert_eq!(tree.remove("/b/c/d/"), Ok(()));
    assert_eq!(tree.list("/b/"), Ok("c".to_owned()));
    drop(tree);
}

#[test]
fn scenario_two_move_into_own_descendant_is_illegal() {
    let tree = Tree::new();
    tree.create("/a/").unwrap();
    tree.create("/a/b/").unwrap();
    assert_eq!(tree.mv("/a/", "/a/b/x/"), Err(TreeError::IllegalMove));
}

#[test]
fn scenario_three_move_into_sibling_and_list() {
    let tree = Tree::new();
    tree.create("/a/").unwrap();
    tree.create("/b/").unwrap();
    assert_eq!(tree.mv("/a/", "/b/a/"), Ok(()));
    assert_eq!(tree.list("/"), Ok("b".to_owned()));
    assert_eq!(tree.list("/b/"), Ok("a".to_owned()));
}

#[test]
fn boundary_empty_tree_lists_as_empty_string() {
    let tree = Tree::new();
    assert_eq!(tree.list("/"), Ok(String::new()));
}

#[test]
fn boundary_remove_root_is_busy() {
    let tree = Tree::new();
    assert_eq!(tree.remove("/"), Err(TreeError::Busy));
}

#[test]
fn boundary_create_root_already_exists() {
    let tree = Tree::new();
    assert_eq!(tree.create("/"), Err(TreeError::AlreadyExists));
}

#[test]
fn boundary_move_root_is_busy() {
    let tree = Tree::new();
    assert_eq!(tree.mv("/", "/a/"), Err(TreeError::Busy));
}

#[test]
fn boundary_move_onto_root_already_exists() {
    let tree = Tree::new();
    tree.create("/a/").unwrap();
    assert_eq!(tree.mv("/a/", "/"), Err(TreeError::AlreadyExists));
}

#[test]
fn boundary_move_into_existing_descendant_is_illegal() {
    let tree = Tree::new();
    tree.create("/a/").unwrap();
    tree.create("/a/b/").unwrap();
    assert_eq!(tree.mv("/a/", "/a/b/"), Err(TreeError::IllegalMove));
}

#[test]
fn boundary_move_onto_itself_is_already_exists() {
    let tree = Tree::new();
    tree.create("/a/").unwrap();
    assert_eq!(tree.mv("/a/", "/a/"), Err(TreeError::AlreadyExists));
}

#[test]
fn create_then_remove_round_trips_listing() {
    let tree = Tree::new();
    tree.create("/a/").unwrap();
    let before = tree.list("/").unwrap();
    tree.create("/a/b/").unwrap();
    tree.remove("/a/b/").unwrap();
    let after = tree.list("/").unwrap();
    assert_eq!(before, after);
}

#[test]
fn move_then_reverse_move_restores_the_tree() {
    let tree = Tree::new();
    tree.create("/a/").unwrap();
    tree.create("/b/").unwrap();
    tree.mv("/a/", "/b/a/").unwrap();
    tree.mv("/b/a/", "/a/").unwrap();
    assert_eq!(tree.list("/"), Ok("a,b".to_owned()));
    assert_eq!(tree.list("/b/"), Ok(String::new()));
}

#[test]
fn repeated_create_same_path_is_ok_then_already_exists() {
    let tree = Tree::new();
    assert_eq!(tree.create("/p/"), Ok(()));
    assert_eq!(tree.create("/p/"), Err(TreeError::AlreadyExists));
}
