//! Error types for the Member actor.

use crate::book_actor::BookError;
use thiserror::Error;

/// Errors that can occur during member operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MemberError {
    /// The requested member was not found.
    #[error("Member not found: {0}")]
    NotFound(String),

    /// The member still holds books and cannot be removed.
    #[error("Member {id} still holds {count} books")]
    OutstandingLoans { id: String, count: usize },

    /// The book actor failed while serving a borrow or return.
    #[error("Book actor error: {0}")]
    Book(#[from] BookError),

    /// The actor answered with a result that does not match the request.
    #[error("Unexpected response for {0}")]
    UnexpectedResponse(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
