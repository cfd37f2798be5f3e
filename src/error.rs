//! Error type for position-taking list operations.

use thiserror::Error;

/// Errors returned by [`WordList`](crate::WordList) operations that accept a
/// [`Slot`](crate::Slot) or [`NodeHandle`](crate::NodeHandle).
///
/// A slot that currently holds no node is not an error: deleting at an empty
/// slot is a no-op. Allocation failure aborts, like every `std` collection.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WordListError {
    /// The handle refers to a node that was deleted from the list.
    #[error("stale node handle: the node was deleted")]
    StaleHandle,
    /// The handle was issued by a different list.
    #[error("node handle belongs to a different list")]
    ForeignHandle,
}
