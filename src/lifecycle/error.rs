//! Errors surfaced by [`LibrarySystem`](super::LibrarySystem).
//!
//! Only infrastructure failures end up here. Duplicates, unknown ids and refused loans
//! are ordinary return values.

use crate::book_actor::BookError;
use crate::member_actor::MemberError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum LibraryError {
    #[error(transparent)]
    Book(#[from] BookError),

    #[error(transparent)]
    Member(#[from] MemberError),

    /// An actor task panicked or was cancelled before shutdown finished.
    #[error("Actor task failed: {0}")]
    Shutdown(String),
}
