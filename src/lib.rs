//! This crate exposes an ordered key store built on a Binary Search Tree
//! (BST) whose empty child slots are sentinel nodes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! Searching for a key takes `O(height)`. This tree does not rebalance itself,
//! so inserting keys in sorted order gives a tree as tall as it is large.
//! BSTs also naturally support sorted iteration by visiting the left subtree,
//! then the subtree root, then the right subtree.
//!
//! ## Sentinels
//!
//! Instead of `Option`al children, every occupied [`Node`] has two real
//! children, and the bottom of the tree is made of [`Sentinel`][Node::Sentinel]
//! nodes. Inserting turns the sentinel where the search ended into an occupied
//! node in place, and removing a node overwrites it in place with whatever
//! should take its position. A parent never has to rewrite its own links.
//!
//! # Examples
//!
//! ```
//! use bst::{KeyNotFound, Tree};
//!
//! let mut tree = Tree::new();
//! for key in [9, 4, 10, 3, 6, 11, 2, 5, 7] {
//!     tree.insert(key);
//! }
//!
//! assert!(tree.inorder().copied().eq([2, 3, 4, 5, 6, 7, 9, 10, 11]));
//! assert!(tree.breadth_first().copied().eq([9, 4, 10, 3, 6, 11, 2, 5, 7]));
//!
//! assert!(!tree.contains(&1));
//! assert!(tree.contains(&10));
//!
//! tree.remove(&10)?;
//! assert!(!tree.contains(&10));
//! assert!(tree.inorder().copied().eq([2, 3, 4, 5, 6, 7, 9, 11]));
//!
//! assert_eq!(tree.remove(&10), Err(KeyNotFound));
//! # Ok::<(), KeyNotFound>(())
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod node;
pub mod traversal;
mod tree;


pub use error::KeyNotFound;
pub use node::{Node, Occupied};
pub use tree::Tree;
