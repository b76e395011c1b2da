//! The vertices of a [`Tree`][crate::Tree].
//!
//! Every child link of an occupied [`Node`] points at a real `Node`. Where a
//! classic BST would keep a null pointer, this one keeps a
//! [`Sentinel`][Node::Sentinel]. Inserting a key never has to attach a new
//! node to an empty slot: the empty slot is already a node, and it is promoted
//! in place.

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use crate::traversal::Preorder;

/// A vertex of the tree. It is either a sentinel marking "no key here" or an
/// occupied node with a key and two children (which may be sentinels).
///
/// `Clone`, `PartialEq` and `Debug` walk the subtree with an explicit stack so
/// they are safe on degenerate trees. Dropping is only made iterative by
/// [`Tree`][crate::Tree]; a deep `Node` held on its own drops recursively.
pub enum Node<K> {
    /// Marks the absence of a key. A sentinel has no children.
    Sentinel,
    /// A node holding a key and two owned children.
    Occupied(Occupied<K>),
}

/// The contents of an occupied [`Node`].
pub struct Occupied<K> {
    key: K,
    left: Box<Node<K>>,
    right: Box<Node<K>>,
}

impl<K> Occupied<K> {
    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The left child, possibly a sentinel.
    pub fn left(&self) -> &Node<K> {
        &self.left
    }

    /// The right child, possibly a sentinel.
    pub fn right(&self) -> &Node<K> {
        &self.right
    }
}

/// Manual implementation of `Default` so an empty node doesn't require `K: Default`.
impl<K> Default for Node<K> {
    fn default() -> Self {
        Self::Sentinel
    }
}

/// Work left for cloning a subtree.
enum CloneStep<'a, K> {
    /// A source subtree that hasn't been copied yet.
    Expand(&'a Node<K>),
    /// A key whose two copied children are on top of the output stack.
    Build(&'a K),
}

impl<K> Clone for Node<K>
where
    K: Clone,
{
    // Builds copies bottom up: children land on `built` before the key that
    // owns them, so a `Build` step pops its right then its left child.
    fn clone(&self) -> Self {
        let mut work = vec![CloneStep::Expand(self)];
        let mut built: Vec<Self> = Vec::new();
        while let Some(step) = work.pop() {
            match step {
                CloneStep::Expand(node) => match node.parts() {
                    Some((key, left, right)) => {
                        work.push(CloneStep::Build(key));
                        work.push(CloneStep::Expand(right));
                        work.push(CloneStep::Expand(left));
                    }
                    None => built.push(Self::Sentinel),
                },
                CloneStep::Build(key) => {
                    let right = built.pop().unwrap_or_default();
                    let left = built.pop().unwrap_or_default();
                    built.push(Self::Occupied(Occupied {
                        key: key.clone(),
                        left: Box::new(left),
                        right: Box::new(right),
                    }));
                }
            }
        }

        built.pop().unwrap_or_default()
    }
}

impl<K> PartialEq for Node<K>
where
    K: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        let mut pairs = vec![(self, other)];
        while let Some((a, b)) = pairs.pop() {
            match (a.parts(), b.parts()) {
                (None, None) => {}
                (Some((a_key, a_left, a_right)), Some((b_key, b_left, b_right))) => {
                    if a_key != b_key {
                        return false;
                    }
                    pairs.push((a_right, b_right));
                    pairs.push((a_left, b_left));
                }
                _ => return false,
            }
        }
        true
    }
}

impl<K> Eq for Node<K> where K: Eq {}

/// Lists the subtree's keys in preorder, which is enough to rebuild the shape
/// of a BST.
impl<K> fmt::Debug for Node<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(Preorder::new(self)).finish()
    }
}

impl<K> Node<K> {
    /// Returns `true` if this node carries no key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.root().is_sentinel());
    ///
    /// tree.insert(1);
    /// assert!(!tree.root().is_sentinel());
    /// ```
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Self::Sentinel)
    }

    /// Returns `true` if this node carries a key. This is the negation of
    /// [`is_sentinel`][Node::is_sentinel].
    pub fn is_present(&self) -> bool {
        !self.is_sentinel()
    }

    /// The key stored in this node, if any.
    pub fn key(&self) -> Option<&K> {
        match self {
            Self::Sentinel => None,
            Self::Occupied(n) => Some(n.key()),
        }
    }

    /// The left child. Sentinels have no children so this is `None` for them.
    /// For an occupied node the child is always returned, even when it is
    /// itself a sentinel.
    pub fn left(&self) -> Option<&Self> {
        match self {
            Self::Sentinel => None,
            Self::Occupied(n) => Some(n.left()),
        }
    }

    /// The right child. See [`left`][Node::left].
    pub fn right(&self) -> Option<&Self> {
        match self {
            Self::Sentinel => None,
            Self::Occupied(n) => Some(n.right()),
        }
    }

    /// Splits an occupied node into its key and children.
    pub(crate) fn parts(&self) -> Option<(&K, &Self, &Self)> {
        match self {
            Self::Sentinel => None,
            Self::Occupied(n) => Some((&n.key, &n.left, &n.right)),
        }
    }

    /// Builds an occupied node with two fresh sentinel children.
    pub(crate) fn leaf(key: K) -> Self {
        Self::Occupied(Occupied {
            key,
            left: Box::default(),
            right: Box::default(),
        })
    }

    /// Turns this node into an occupied leaf holding `key`. Only called on
    /// sentinels found by the descent in [`Tree::insert`][crate::Tree::insert].
    pub(crate) fn promote(&mut self, key: K) {
        debug_assert!(self.is_sentinel(), "promoting an occupied node");
        self.substitute(Self::leaf(key));
    }

    /// Replaces this node with `other` *in place*. Whoever links to this node
    /// now links to `other`'s key and children. The previous contents are
    /// returned so the caller can take the key out of them.
    pub(crate) fn substitute(&mut self, other: Self) -> Self {
        mem::replace(self, other)
    }

    /// Consumes this node and returns its key.
    fn into_key(self) -> Option<K> {
        match self {
            Self::Sentinel => None,
            Self::Occupied(n) => Some(n.key),
        }
    }

    /// Compares `key` against this node's key. `None` means this is a sentinel
    /// and the descent has to stop.
    pub(crate) fn compare(&self, key: &K) -> Option<Ordering>
    where
        K: Ord,
    {
        self.key().map(|k| key.cmp(k))
    }

    /// The child a descent for a key ordered `ordering` relative to this node
    /// continues into. Only valid on an occupied node with a key that differs
    /// from the one searched for.
    pub(crate) fn child(&self, ordering: Ordering) -> &Self {
        debug_assert_ne!(ordering, Ordering::Equal, "descending past the key");
        debug_assert!(self.is_present(), "descending past a sentinel");
        match self {
            Self::Occupied(n) => match ordering {
                Ordering::Less => &n.left,
                Ordering::Equal | Ordering::Greater => &n.right,
            },
            Self::Sentinel => self,
        }
    }

    /// Mutable version of [`child`][Node::child].
    pub(crate) fn child_mut(&mut self, ordering: Ordering) -> &mut Self {
        debug_assert_ne!(ordering, Ordering::Equal, "descending past the key");
        debug_assert!(self.is_present(), "descending past a sentinel");
        match self {
            Self::Occupied(n) => match ordering {
                Ordering::Less => &mut n.left,
                Ordering::Equal | Ordering::Greater => &mut n.right,
            },
            Self::Sentinel => self,
        }
    }

    /// Follows right links from this node until reaching a node whose right
    /// child is a sentinel. That node holds the largest key of the subtree.
    fn max_mut(&mut self) -> &mut Self {
        let mut node = self;
        while node.right().is_some_and(Node::is_present) {
            node = node.child_mut(Ordering::Greater);
        }
        node
    }

    /// Removes this node's key from the tree while keeping the BST invariant
    /// and returns it. Nothing happens to a sentinel.
    ///
    /// There are three cases:
    ///
    /// 1. Both children are occupied. The in-order predecessor (the largest
    ///    key of the left subtree) is ejected and its key moves into this
    ///    node. This node stays where it is; only its key changes.
    /// 2. Exactly one child is occupied. That child is substituted into this
    ///    node.
    /// 3. Both children are sentinels. This node becomes a sentinel itself.
    ///
    /// ```text
    ///        7                 6
    ///       / \               / \
    ///      4   9    eject    4   9
    ///     / \      ------>  / \
    ///    2   6             2   5
    ///       /
    ///      5
    /// ```
    pub(crate) fn eject(&mut self) -> Option<K> {
        let Self::Occupied(n) = self else {
            return None;
        };

        match (n.left.is_present(), n.right.is_present()) {
            (true, true) => {
                // The predecessor has no right child so this is case 2 or 3.
                let predecessor = n.left.max_mut().eject()?;
                Some(mem::replace(&mut n.key, predecessor))
            }
            (true, false) => {
                let child = mem::take(&mut *n.left);
                self.substitute(child).into_key()
            }
            (false, true) => {
                let child = mem::take(&mut *n.right);
                self.substitute(child).into_key()
            }
            (false, false) => self.substitute(Self::Sentinel).into_key(),
        }
    }

    /// Asserts that this node's immediate children are ordered around it.
    pub(crate) fn assert_local_order(&self)
    where
        K: Ord,
    {
        if let Self::Occupied(n) = self {
            if let Some(left) = n.left.key() {
                assert!(*left < n.key);
            }
            if let Some(right) = n.right.key() {
                assert!(*right > n.key);
            }
        }
    }

    /// Detaches both children, leaving this node childless. Used to drop deep
    /// trees without recursing.
    pub(crate) fn take_children(&mut self) -> Option<(Self, Self)> {
        match self {
            Self::Sentinel => None,
            Self::Occupied(n) => Some((mem::take(&mut *n.left), mem::take(&mut *n.right))),
        }
    }
}
