//! # Book Actor
//!
//! Owns the catalog: one [`Book`] per id, with copy-count bookkeeping exposed as
//! [`BookAction`]s.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Book`]
//! - [`error`] - [`BookError`]
//! - [`actions`] - [`BookAction`] and [`BookActionResult`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use library_inventory::book_actor;
//! use library_inventory::clients::BookClient;
//! use library_inventory::model::{BookCreate, BookId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = book_actor::new(32);
//!     let client = BookClient::new(generic_client);
//!
//!     // No dependencies
//!     tokio::spawn(actor.run(()));
//!
//!     client.add_book(BookCreate::new("B001", "Clean Code", "Robert C. Martin", 2)).await?;
//!     assert!(client.borrow_copy(BookId::from("B001")).await?);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Book;

/// Creates a new Book actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Book>, ResourceClient<Book>) {
    ResourceActor::new(buffer_size)
}
