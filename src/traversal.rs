//! Depth-first traversals. Each one either hands every key to a visitor
//! callback, or collects the keys into a `Vec` in visiting order.
//!
//! # Examples
//!
//! ```
//! use arbre::traversal::{collect, inorder, Order};
//! use arbre::tree::{compose, leaf};
//!
//! let tree = compose(leaf(1), 2, leaf(3));
//!
//! let mut sum = 0;
//! inorder(&tree, &mut |x| sum += x);
//! assert_eq!(sum, 6);
//!
//! assert_eq!(collect(&tree, Order::Pre), vec![2, 1, 3]);
//! assert_eq!(collect(&tree, Order::In), vec![1, 2, 3]);
//! assert_eq!(collect(&tree, Order::Post), vec![1, 3, 2]);
//! ```

use crate::tree::Tree;

/// When a node is visited relative to its subtrees.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Order {
    /// The node, then its left subtree, then its right subtree.
    Pre,
    /// The left subtree, then the node, then the right subtree. For a valid
    /// BST this visits keys in ascending order.
    In,
    /// The left subtree, then the right subtree, then the node.
    Post,
}

/// Visits the node before either of its subtrees.
pub fn preorder<F>(tree: &Tree, visit: &mut F)
where
    F: FnMut(i32),
{
    if let Some(node) = tree {
        visit(node.value());
        preorder(node.left_tree(), visit);
        preorder(node.right_tree(), visit);
    }
}

/// Visits the left subtree, then the node, then the right subtree.
pub fn inorder<F>(tree: &Tree, visit: &mut F)
where
    F: FnMut(i32),
{
    if let Some(node) = tree {
        inorder(node.left_tree(), visit);
        visit(node.value());
        inorder(node.right_tree(), visit);
    }
}

/// Visits the node after both of its subtrees.
pub fn postorder<F>(tree: &Tree, visit: &mut F)
where
    F: FnMut(i32),
{
    if let Some(node) = tree {
        postorder(node.left_tree(), visit);
        postorder(node.right_tree(), visit);
        visit(node.value());
    }
}

/// Runs the traversal matching `order`.
pub fn traverse<F>(tree: &Tree, order: Order, visit: &mut F)
where
    F: FnMut(i32),
{
    match order {
        Order::Pre => preorder(tree, visit),
        Order::In => inorder(tree, visit),
        Order::Post => postorder(tree, visit),
    }
}

/// Collects the keys in the order `order` visits them.
pub fn collect(tree: &Tree, order: Order) -> Vec<i32> {
    let mut keys = Vec::new();
    traverse(tree, order, &mut |x| keys.push(x));
    keys
}

/// Keys in preorder.
pub fn preorder_vec(tree: &Tree) -> Vec<i32> {
    collect(tree, Order::Pre)
}

/// Keys in ascending order.
pub fn inorder_vec(tree: &Tree) -> Vec<i32> {
    collect(tree, Order::In)
}

/// Keys in postorder.
pub fn postorder_vec(tree: &Tree) -> Vec<i32> {
    collect(tree, Order::Post)
}
