//! Errors returned by [`Tree`][crate::Tree] operations.

/// Returned by [`Tree::remove`][crate::Tree::remove] when the tree holds no
/// node with the requested key. The tree is left unmodified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("key not found in tree")]
pub struct KeyNotFound;
