//! The tree itself. A [`Tree`] is either empty (`None`) or owns a boxed root
//! [`Node`], which in turn owns its two subtrees. Every operation here is a
//! free function that recurses on that shape.
//!
//! [`insert`] is functional: it consumes the old tree and returns a new root,
//! rebuilding only the nodes on the path to the new key. [`delete`] also
//! consumes the tree but mutates the nodes on the search path in place and
//! hands back the (possibly same) root.
//!
//! # Examples
//!
//! ```
//! use arbre::tree::{contains, delete, insert, size, Tree};
//!
//! let tree: Tree = None;
//!
//! // Nothing in here yet.
//! assert!(!contains(1, &tree));
//!
//! let tree = insert(1, tree);
//! let tree = insert(2, tree);
//! assert!(contains(2, &tree));
//!
//! // Inserting a key that is already present changes nothing.
//! let tree = insert(2, tree);
//! assert_eq!(size(&tree), 2);
//!
//! let tree = delete(2, tree);
//! assert!(!contains(2, &tree));
//! assert_eq!(size(&tree), 1);
//! ```

use std::cmp::Ordering;

/// A Binary Search Tree of `i32` keys. `None` is the empty tree.
pub type Tree = Option<Box<Node>>;

/// A `Node` holds a key and owns its left and right subtrees. Every key in
/// `left` is smaller than `value` and every key in `right` is larger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    value: i32,
    left: Tree,
    right: Tree,
}

impl Node {
    /// The key stored in this node.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    pub(crate) fn left_tree(&self) -> &Tree {
        &self.left
    }

    pub(crate) fn right_tree(&self) -> &Tree {
        &self.right
    }
}

/// Builds a tree whose root holds `value` with the given subtrees.
///
/// Nothing is checked: the caller must make sure every key in `left` is
/// smaller than `value` and every key in `right` is larger.
///
/// # Examples
///
/// ```
/// use arbre::tree::{compose, leaf, size};
///
/// let tree = compose(leaf(1), 2, leaf(3));
///
/// assert_eq!(size(&tree), 3);
/// assert_eq!(tree.as_ref().map(|root| root.value()), Some(2));
/// ```
pub fn compose(left: Tree, value: i32, right: Tree) -> Tree {
    Some(Box::new(Node { value, left, right }))
}

/// A tree made of a single node with no children.
pub fn leaf(value: i32) -> Tree {
    compose(None, value, None)
}

/// Counts the nodes in the tree.
pub fn size(tree: &Tree) -> usize {
    match tree {
        None => 0,
        Some(node) => 1 + size(&node.left) + size(&node.right),
    }
}

/// Number of nodes on the longest path from the root down to a leaf. The
/// empty tree has a height of 0 and a single node has a height of 1.
pub fn height(tree: &Tree) -> usize {
    match tree {
        None => 0,
        Some(node) => 1 + height(&node.left).max(height(&node.right)),
    }
}

/// Finds the node holding `x`, or `None` if no node does.
///
/// # Examples
///
/// ```
/// use arbre::tree::{find, insert, Tree};
///
/// let mut tree: Tree = None;
/// for x in [1, 2, 3, 4] {
///     tree = insert(x, tree);
/// }
///
/// // Found at the bottom of the right spine.
/// assert_eq!(find(4, &tree).map(|node| node.value()), Some(4));
/// assert!(find(42, &tree).is_none());
/// ```
pub fn find(x: i32, tree: &Tree) -> Option<&Node> {
    let node = tree.as_deref()?;
    match x.cmp(&node.value) {
        Ordering::Less => find(x, &node.left),
        Ordering::Equal => Some(node),
        Ordering::Greater => find(x, &node.right),
    }
}

/// Whether some node in the tree holds `x`.
pub fn contains(x: i32, tree: &Tree) -> bool {
    find(x, tree).is_some()
}

/// Returns a tree holding every key of `tree` plus `x`.
///
/// Only the nodes on the path from the root to the new leaf are rebuilt, the
/// siblings hanging off that path are moved over as they are. Inserting a key
/// that is already present returns the tree untouched.
///
/// # Examples
///
/// ```
/// use arbre::tree::{insert, leaf, Tree};
///
/// let tree = insert(2, None);
/// assert_eq!(tree, leaf(2));
///
/// let tree = insert(2, tree);
/// assert_eq!(tree, leaf(2));
/// ```
pub fn insert(x: i32, tree: Tree) -> Tree {
    let node = match tree {
        None => return leaf(x),
        Some(node) => node,
    };

    match x.cmp(&node.value) {
        Ordering::Less => {
            let Node { value, left, right } = *node;
            compose(insert(x, left), value, right)
        }
        Ordering::Equal => Some(node),
        Ordering::Greater => {
            let Node { value, left, right } = *node;
            compose(left, value, insert(x, right))
        }
    }
}

/// Removes `x` from the tree and returns the new root. Deleting a key that
/// isn't in the tree is a no-op.
///
/// The nodes on the search path are kept and have their child links
/// reassigned; only the node holding `x` (or, when it has two children, its
/// predecessor) is dropped.
///
/// # Examples
///
/// ```
/// use arbre::tree::{compose, delete, leaf};
///
/// let tree = compose(leaf(1), 2, leaf(3));
///
/// let tree = delete(42, tree);
/// assert_eq!(tree, compose(leaf(1), 2, leaf(3)));
///
/// let tree = delete(3, tree);
/// assert_eq!(tree, compose(leaf(1), 2, None));
/// ```
pub fn delete(x: i32, tree: Tree) -> Tree {
    let mut node = tree?;
    match x.cmp(&node.value) {
        Ordering::Less => node.left = delete(x, node.left.take()),
        Ordering::Equal => return delete_root(node),
        Ordering::Greater => node.right = delete(x, node.right.take()),
    }
    Some(node)
}

/// Removes the root of a subtree and returns what should take its place.
///
/// With at most one child, that child replaces the root. With two children
/// the root takes over the value of its in-order predecessor (the largest key
/// in its left subtree) and the predecessor is deleted from the left subtree
/// instead, so the root allocation itself survives.
pub fn delete_root(mut node: Box<Node>) -> Tree {
    match (node.left.take(), node.right.take()) {
        (None, right) => right,
        (left, None) => left,
        (Some(left), right) => {
            node.value = max_of(&left).value;
            node.left = delete(node.value, Some(left));
            node.right = right;
            Some(node)
        }
    }
}

/// The node holding the largest key under `node`, found by walking right
/// until there is no right child.
pub fn max_of(node: &Node) -> &Node {
    match &node.right {
        None => node,
        Some(right) => max_of(right),
    }
}
