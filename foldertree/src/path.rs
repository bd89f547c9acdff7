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

//! Path grammar: `is_path_valid`, `split_path`, `make_path_to_parent`.
//!
//! The spec treats this as an external collaborator -- callers pass us the path
//! string and we hand back validated, borrowed components. There's nothing fancy
//! here: a path is `/`, or `/c/`, or `/c1/c2/.../cn/`, where every `ci` is a
//! non-empty run of lowercase ASCII letters bounded by [`MAX_COMPONENT_LEN`].

use crate::error::TreeError;

/// Bound on a single component's length, e.g. `"foo"` in `/foo/`.
pub const MAX_COMPONENT_LEN: usize = 255;
/// Bound on the whole path string.
pub const MAX_PATH_LEN: usize = 4096;

fn is_valid_component(component: &str) -> bool {
    !component.is_empty()
        && component.len() <= MAX_COMPONENT_LEN
        && component.bytes().all(|b| b.is_ascii_lowercase())
}

/// `true` iff `path` is `/` or matches `(/component)+/` with every component
/// satisfying [`is_valid_component`].
pub fn is_path_valid(path: &str) -> bool {
    if path.is_empty() || path.len() > MAX_PATH_LEN {
        return false;
    }
    if path == "/" {
        return true;
    }
    if !path.starts_with('/') || !path.ends_with('/') {
        return false;
    }
    path[1..path.len() - 1]
        .split('/')
        .all(is_valid_component)
}

/// Splits a validated non-root path into its ordered components.
///
/// `"/a/b/c/"` becomes `["a", "b", "c"]`; `"/"` becomes `[]`.
pub(crate) fn split_path(path: &str) -> Vec<&str> {
    if path == "/" {
        return Vec::new();
    }
    path[1..path.len() - 1].split('/').collect()
}

/// Splits a validated non-root path into the components of its parent and the
/// terminal component's own name, e.g. `"/a/b/c/"` -> `(["a", "b"], "c")`.
pub(crate) fn split_parent_and_name(path: &str) -> (Vec<&str>, &str) {
    let mut components = split_path(path);
    // `path` is always non-root when this is called, so this is never empty.
    let name = components.pop().expect("non-root path has a last component");
    (components, name)
}

/// Validates `path` and reports the standard error for a malformed one.
pub(crate) fn validate(path: &str) -> Result<(), TreeError> {
    if is_path_valid(path) {
        Ok(())
    } else {
        Err(TreeError::InvalidArgument)
    }
}

/// `true` iff `target`'s path has `source`'s path as a strict (component-wise)
/// prefix, i.e. `target` names a folder strictly inside `source`'s own
/// subtree. Used by `move` to reject moving a folder into its own subtree.
///
/// `source == target` is deliberately *not* a prefix match here: that case
/// isn't a subtree violation, it's an ordinary "the name is already taken"
/// conflict, which the move's own target-exists check already reports as
/// `AlreadyExists`.
pub(crate) fn is_prefix_path(source: &str, target: &str) -> bool {
    source.len() < target.len() && target.starts_with(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_valid() {
        assert!(is_path_valid("/"));
        assert!(split_path("/").is_empty());
    }

    #[test]
    fn simple_paths_are_valid() {
        assert!(is_path_valid("/a/"));
        assert!(is_path_valid("/a/b/c/"));
        assert_eq!(split_path("/a/b/c/"), vec!["a", "b", "c"]);
    }

    #[test]
    fn rejects_malformed_paths() {
        assert!(!is_path_valid(""));
        assert!(!is_path_valid("a/b/"));
        assert!(!is_path_valid("/a/b"));
        assert!(!is_path_valid("/a//b/"));
        assert!(!is_path_valid("/A/"));
        assert!(!is_path_valid("/a1/"));
        assert!(!is_path_valid("//"));
    }

    #[test]
    fn parent_and_name_split() {
        assert_eq!(split_parent_and_name("/a/b/c/"), (vec!["a", "b"], "c"));
        assert_eq!(split_parent_and_name("/a/"), (vec![], "a"));
    }

    #[test]
    fn prefix_detection() {
        assert!(is_prefix_path("/a/", "/a/b/c/"));
        assert!(!is_prefix_path("/a/", "/a/"));
        assert!(!is_prefix_path("/a/", "/ab/"));
        assert!(!is_prefix_path("/a/b/", "/a/"));
    }
}
