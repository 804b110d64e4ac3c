//! # Member Actor
//!
//! Owns the member registry and runs the borrow and return workflows.
//!
//! ## Overview
//!
//! Each [`Member`] records which books it holds. Borrowing and returning are
//! [`MemberAction`]s: the member actor looks the book up through the [`BookClient`]
//! injected as its context, adjusts the copy count on the book actor, and only then
//! updates the member's own loan list. Because the member actor handles one message at a
//! time, the two halves of a loan are never observed apart by another borrow or return.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Member`]
//! - [`error`] - [`MemberError`]
//! - [`actions`] - [`MemberAction`] and [`MemberActionResult`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use library_inventory::clients::{BookClient, MemberClient};
//! use library_inventory::model::{BookCreate, BookId, BorrowStatus, MemberCreate, MemberId};
//! use library_inventory::{book_actor, member_actor};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (book_actor, books) = book_actor::new(32);
//!     let (member_actor, members) = member_actor::new(32);
//!     let books = BookClient::new(books);
//!     let members = MemberClient::new(members);
//!
//!     tokio::spawn(book_actor.run(()));
//!     // The member actor needs the book client
//!     tokio::spawn(member_actor.run(books.clone()));
//!
//!     books.add_book(BookCreate::new("B001", "Intro", "X", 1)).await?;
//!     members.add_member(MemberCreate::new("M001", "Rishi")).await?;
//!
//!     let status = members.borrow(MemberId::from("M001"), BookId::from("B001")).await?;
//!     assert_eq!(status, BorrowStatus::Borrowed);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Member;

/// Creates a new Member actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Member>, ResourceClient<Member>) {
    ResourceActor::new(buffer_size)
}
