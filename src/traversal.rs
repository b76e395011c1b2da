//! Lazy traversals over a [`Tree`][crate::Tree].
//!
//! Each traversal is an iterator that keeps its own stack (or queue) of
//! pending nodes instead of recursing, so walking a degenerate tree doesn't
//! grow the call stack and every key can be handed out one at a time.
//!
//! Traversals borrow the tree, so it cannot be modified while one is alive.
//! A traversal is single pass. To walk the tree again, ask for a new one.
//!
//! Sentinels are skipped: they yield no key and have no children to visit.
//!
//! # Examples
//!
//! ```
//! use bst::Tree;
//!
//! let tree: Tree<_> = [9, 4, 10, 3, 6, 11, 2, 5, 7].into_iter().collect();
//!
//! let preorder: Vec<_> = tree.preorder().copied().collect();
//! let depth_first: Vec<_> = tree.depth_first().copied().collect();
//! assert_eq!(preorder, [9, 4, 3, 2, 6, 5, 7, 10, 11]);
//! assert_eq!(preorder, depth_first);
//!
//! let postorder: Vec<_> = tree.postorder().copied().collect();
//! assert_eq!(postorder, [2, 3, 5, 7, 6, 4, 11, 10, 9]);
//! ```

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::Node;

/// Visits a node, then its left subtree, then its right subtree.
///
/// Yields the same sequence as [`DepthFirst`] but walks down left spines,
/// keeping only the right subtrees it still owes a visit.
pub struct Preorder<'a, K> {
    current: &'a Node<K>,
    pending: Vec<&'a Node<K>>,
}

impl<'a, K> Preorder<'a, K> {
    /// Starts a preorder traversal of the subtree rooted at `root`.
    pub fn new(root: &'a Node<K>) -> Self {
        Self {
            current: root,
            pending: Vec::new(),
        }
    }
}

impl<'a, K> Iterator for Preorder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((key, left, right)) = self.current.parts() {
                self.pending.push(right);
                self.current = left;
                return Some(key);
            }
            self.current = self.pending.pop()?;
        }
    }
}

impl<K> FusedIterator for Preorder<'_, K> {}

/// Visits the left subtree, then the node, then the right subtree. Keys come
/// out in ascending order.
///
/// # Examples
///
/// ```
/// use bst::Tree;
///
/// let tree: Tree<_> = [3, 1, 2].into_iter().collect();
///
/// assert!(tree.inorder().eq([1, 2, 3].iter()));
/// ```
pub struct Inorder<'a, K> {
    current: &'a Node<K>,
    /// Keys whose left subtree is being walked, with the right subtree to
    /// walk after them.
    pending: Vec<(&'a K, &'a Node<K>)>,
}

impl<'a, K> Inorder<'a, K> {
    /// Starts an inorder traversal of the subtree rooted at `root`.
    pub fn new(root: &'a Node<K>) -> Self {
        Self {
            current: root,
            pending: Vec::new(),
        }
    }
}

impl<'a, K> Iterator for Inorder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((key, left, right)) = self.current.parts() {
            self.pending.push((key, right));
            self.current = left;
        }

        let (key, right) = self.pending.pop()?;
        self.current = right;
        Some(key)
    }
}

impl<K> FusedIterator for Inorder<'_, K> {}

/// Work left for a [`Postorder`] traversal.
enum Visit<'a, K> {
    /// A subtree that hasn't been looked at yet.
    Expand(&'a Node<K>),
    /// A key whose subtrees have both been visited.
    Emit(&'a K),
}

/// Visits the left subtree, then the right subtree, then the node.
pub struct Postorder<'a, K> {
    stack: Vec<Visit<'a, K>>,
}

impl<'a, K> Postorder<'a, K> {
    /// Starts a postorder traversal of the subtree rooted at `root`.
    pub fn new(root: &'a Node<K>) -> Self {
        Self {
            stack: vec![Visit::Expand(root)],
        }
    }
}

impl<'a, K> Iterator for Postorder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.stack.pop()? {
                Visit::Emit(key) => return Some(key),
                Visit::Expand(node) => {
                    if let Some((key, left, right)) = node.parts() {
                        self.stack.push(Visit::Emit(key));
                        self.stack.push(Visit::Expand(right));
                        self.stack.push(Visit::Expand(left));
                    }
                }
            }
        }
    }
}

impl<K> FusedIterator for Postorder<'_, K> {}

/// Depth first search with an explicit stack. The right child is pushed
/// before the left one so the left subtree is finished first, which makes the
/// output identical to [`Preorder`].
pub struct DepthFirst<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> DepthFirst<'a, K> {
    /// Starts a depth first traversal of the subtree rooted at `root`.
    pub fn new(root: &'a Node<K>) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a, K> Iterator for DepthFirst<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = self.stack.pop()?;
            if let Some((key, left, right)) = node.parts() {
                self.stack.push(right);
                self.stack.push(left);
                return Some(key);
            }
        }
    }
}

impl<K> FusedIterator for DepthFirst<'_, K> {}

/// Breadth first search with an explicit queue. Keys come out level by
/// level, left to right.
///
/// # Examples
///
/// ```
/// use bst::Tree;
///
/// let tree: Tree<_> = [2, 3, 1].into_iter().collect();
///
/// assert!(tree.breadth_first().eq([2, 1, 3].iter()));
/// ```
pub struct BreadthFirst<'a, K> {
    queue: VecDeque<&'a Node<K>>,
}

impl<'a, K> BreadthFirst<'a, K> {
    /// Starts a breadth first traversal of the subtree rooted at `root`.
    pub fn new(root: &'a Node<K>) -> Self {
        Self {
            queue: VecDeque::from([root]),
        }
    }
}

impl<'a, K> Iterator for BreadthFirst<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = self.queue.pop_front()?;
            if let Some((key, left, right)) = node.parts() {
                self.queue.push_back(left);
                self.queue.push_back(right);
                return Some(key);
            }
        }
    }
}

impl<K> FusedIterator for BreadthFirst<'_, K> {}
