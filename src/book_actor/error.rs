//! Error types for the Book actor.

use thiserror::Error;

/// Errors that can occur during book operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BookError {
    /// The requested book was not found.
    #[error("Book not found: {0}")]
    NotFound(String),

    /// The book still has copies out on loan and cannot leave the catalog.
    #[error("Book {id} has {on_loan} copies on loan")]
    OutstandingLoans { id: String, on_loan: u32 },

    /// The actor answered with a result that does not match the request.
    #[error("Unexpected response for {0}")]
    UnexpectedResponse(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
