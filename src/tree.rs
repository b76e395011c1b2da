//! A mutable BST whose empty slots are sentinel nodes.
//!
//! # Examples
//!
//! ```
//! use bst::{KeyNotFound, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(&1));
//!
//! tree.insert(1);
//! assert!(tree.search(&1));
//!
//! // Inserting the same key again does nothing.
//! tree.insert(1);
//! assert_eq!(tree.len(), 1);
//!
//! // Removing a key that isn't there is an error.
//! assert_eq!(tree.remove(&1), Ok(()));
//! assert_eq!(tree.remove(&1), Err(KeyNotFound));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use crate::traversal::{BreadthFirst, DepthFirst, Inorder, Postorder, Preorder};
use crate::{KeyNotFound, Node};

/// An unbalanced Binary Search Tree of unique keys. Keys can be inserted,
/// searched for, removed, and walked in several orders.
///
/// The tree owns a single root [`Node`]. An empty tree's root is a sentinel.
pub struct Tree<K> {
    root: Node<K>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    // Dropping a `Box` chain recursively would overflow the stack on a
    // degenerate tree, so detach children onto a heap stack instead.
    fn drop(&mut self) {
        let mut stack = vec![mem::take(&mut self.root)];
        while let Some(mut node) = stack.pop() {
            if let Some((left, right)) = node.take_children() {
                stack.push(left);
                stack.push(right);
            }
        }
    }
}

impl<K> Clone for Tree<K>
where
    K: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
        }
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inorder()).finish()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: Node::Sentinel,
        }
    }

    /// The root node. This is the entry point for walking the tree by hand.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// let root = tree.root();
    ///
    /// assert_eq!(root.key(), Some(&2));
    /// assert_eq!(root.left().and_then(|n| n.key()), Some(&1));
    /// assert_eq!(root.right().and_then(|n| n.key()), Some(&3));
    /// ```
    pub fn root(&self) -> &Node<K> {
        &self.root
    }

    /// Returns `true` if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_sentinel()
    }

    /// Counts the keys in the tree. This walks every node.
    pub fn len(&self) -> usize {
        self.inorder().count()
    }

    /// Returns `true` if the tree holds `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.search(&1));
    /// assert!(!tree.search(&42));
    /// ```
    pub fn search(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.binary_search(key).is_present()
    }

    /// Alias for [`search`][Tree::search].
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.search(key)
    }

    /// Inserts `key` into the tree. Inserting a key that is already present
    /// does nothing; the stored key is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert!(tree.search(&1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        let node = self.binary_search_mut(&key);
        if node.is_present() {
            log::trace!("duplicate key ignored on insert");
            return;
        }

        node.promote(key);
        if cfg!(debug_assertions) {
            node.assert_local_order();
        }
        log::trace!("inserted key");
    }

    /// Removes `key` from the tree. If the tree does not hold `key`, nothing
    /// is modified and [`KeyNotFound`] is returned.
    ///
    /// A node with two children takes the key of its in-order predecessor
    /// (the largest key in its left subtree), never its successor.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::{KeyNotFound, Tree};
    ///
    /// let mut tree: Tree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&5), Ok(()));
    /// assert_eq!(tree.root().key(), Some(&3));
    ///
    /// assert_eq!(tree.remove(&5), Err(KeyNotFound));
    /// ```
    pub fn remove(&mut self, key: &K) -> Result<(), KeyNotFound>
    where
        K: Ord,
    {
        let node = self.binary_search_mut(key);
        if node.eject().is_none() {
            log::trace!("remove missed: key not in tree");
            return Err(KeyNotFound);
        }

        if cfg!(debug_assertions) {
            node.assert_local_order();
        }
        log::trace!("removed key");
        Ok(())
    }

    /// Iterates over the keys in ascending order. Same as
    /// [`inorder`][Tree::inorder].
    pub fn iter(&self) -> Inorder<'_, K> {
        self.inorder()
    }

    /// Walks the tree in preorder: node, left subtree, right subtree.
    pub fn preorder(&self) -> Preorder<'_, K> {
        Preorder::new(&self.root)
    }

    /// Walks the tree in order: left subtree, node, right subtree. Keys come
    /// out sorted.
    pub fn inorder(&self) -> Inorder<'_, K> {
        Inorder::new(&self.root)
    }

    /// Walks the tree in postorder: left subtree, right subtree, node.
    pub fn postorder(&self) -> Postorder<'_, K> {
        Postorder::new(&self.root)
    }

    /// Walks the tree depth first using an explicit stack. The keys come out
    /// in the same order as [`preorder`][Tree::preorder].
    pub fn depth_first(&self) -> DepthFirst<'_, K> {
        DepthFirst::new(&self.root)
    }

    /// Walks the tree breadth first (level by level) using an explicit queue.
    pub fn breadth_first(&self) -> BreadthFirst<'_, K> {
        BreadthFirst::new(&self.root)
    }

    /// Descends from the root towards `key`. Returns the node holding `key`
    /// if there is one, otherwise the sentinel where the descent ended.
    fn binary_search(&self, key: &K) -> &Node<K>
    where
        K: Ord,
    {
        let mut node = &self.root;
        while let Some(ordering) = node.compare(key) {
            if ordering == Ordering::Equal {
                break;
            }
            node = node.child(ordering);
        }
        node
    }

    /// Mutable version of [`binary_search`][Tree::binary_search]. The returned
    /// node is the slot `insert` promotes and `remove` ejects.
    fn binary_search_mut(&mut self, key: &K) -> &mut Node<K>
    where
        K: Ord,
    {
        let mut node = &mut self.root;
        while let Some(ordering) = node.compare(key) {
            if ordering == Ordering::Equal {
                break;
            }
            node = node.child_mut(ordering);
        }
        node
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Inorder<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder()
    }
}
