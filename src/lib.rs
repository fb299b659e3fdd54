//! This crate exposes a small, fully recursive Binary Search Tree (BST) over
//! `i32` keys, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are defined recursively using
//! the notion of a [`Node`]. A `Node` stores a key and may have a left and a
//! right child `Node`. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Here a tree is just an `Option<Box<Node>>` (see [`Tree`]) and every operation
//! is a free function recursing on that shape. Insertion is functional: it
//! consumes the old tree and rebuilds the path down to the new key, moving the
//! untouched siblings into the new nodes. Deletion takes ownership of the tree
//! too but re-links child pointers in place.
//!
//! Nothing is balanced, so inserting sorted keys degrades the tree into a list
//! and every recursive operation (including `Drop`) then recurses once per key.
//! Very large degenerate trees can exhaust the stack.
//!
//! # Examples
//!
//! ```
//! use arbre::{delete, find, inorder_vec, insert, size, Tree};
//!
//! let mut tree: Tree = None;
//! for x in [5, 3, 8, 1, 4, 7, 9] {
//!     tree = insert(x, tree);
//! }
//!
//! assert_eq!(inorder_vec(&tree), vec![1, 3, 4, 5, 7, 8, 9]);
//! assert_eq!(size(&tree), 7);
//!
//! // 5 has two children so it is replaced by its predecessor.
//! tree = delete(5, tree);
//! assert_eq!(tree.as_ref().map(|root| root.value()), Some(4));
//! assert!(find(5, &tree).is_none());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod traversal;
pub mod tree;

pub use traversal::{
    collect, inorder, inorder_vec, postorder, postorder_vec, preorder, preorder_vec, traverse,
    Order,
};
pub use tree::{
    compose, contains, delete, delete_root, find, height, insert, leaf, max_of, size, Node, Tree,
};
