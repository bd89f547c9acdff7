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
use crate::path;
use crate::walk::walk_reader_chain;

/// Reader everywhere, including the terminal node: the listing string is built
/// while that last reader lock is still held, so it reflects one consistent
/// snapshot of the folder's children.
pub(crate) fn list(root: &FolderNode, path: &str) -> TreeResult<String> {
    path::validate(path)?;
    let components = path::split_path(path);
    let folder = walk_reader_chain(root, &components)?;
    let mut names = folder.child_names();
    names.sort_unstable();
    Ok(names.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TreeError;
    use crate::ops::create::create;

    #[test]
    fn empty_root_lists_as_empty_string() {
        let root = FolderNode::new();
        assert_eq!(list(&root, "/"), Ok(String::new()));
    }

    #[test]
    fn lists_immediate_children_only() {
        let root = FolderNode::new();
        create(&root, "/a/").unwrap();
        create(&root, "/b/").unwrap();
        create(&root, "/a/c/").unwrap();
        assert_eq!(list(&root, "/"), Ok("a,b".to_owned()));
        assert_eq!(list(&root, "/a/"), Ok("c".to_owned()));
    }

    #[test]
    fn not_found_on_missing_path() {
        let root = FolderNode::new();
        assert_eq!(list(&root, "/a/"), Err(TreeError::NotFound));
    }

    #[test]
    fn invalid_argument_on_malformed_path() {
        let root = FolderNode::new();
        assert_eq!(list(&root, "nope"), Err(TreeError::InvalidArgument));
    }
}
