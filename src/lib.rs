//! # Library Inventory
//!
//! An in-memory lending tracker for a small library: a catalog of books with copy
//! counts, a member registry, and borrow/return workflows that keep both consistent.
//!
//! ## 🏗️ Design
//!
//! State lives in two resource actors built on one generic engine:
//! - **Book actor**: owns every [`Book`](model::Book) and its copy counts.
//! - **Member actor**: owns every [`Member`](model::Member) and the list of books each holds.
//!
//! Each actor runs in its own Tokio task and processes one request at a time, so there
//! are no locks around the state. A borrow or return is a single action on the member
//! actor, which talks to the book actor through a [`BookClient`](clients::BookClient)
//! injected as its context. Concurrent borrows of the last copy therefore cannot both
//! succeed, and a member's loan list always matches the copies missing from the shelf.
//!
//! ### Outcomes vs. Errors
//! Duplicate ids, unknown ids and refused loans are ordinary results: `bool`, `Option`,
//! [`BorrowStatus`](model::BorrowStatus) or [`ReturnStatus`](model::ReturnStatus).
//! `Err` is reserved for an actor that has gone away.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `ResourceActor<T>` message loop, the [`ActorEntity`](framework::ActorEntity)
//! trait, and [`framework::mock`] for testing clients without spawning actors.
//!
//! ### 2. The Data ([`model`])
//! Plain types: books, members, and the borrow/return status values.
//!
//! ### 3. The Actors ([`book_actor`], [`member_actor`])
//! `ActorEntity` implementations with their actions and errors.
//!
//! ### 4. The Interface ([`clients`])
//! Typed wrappers that hide the message passing.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! [`LibrarySystem`](lifecycle::LibrarySystem) starts and wires the actors and exposes
//! the library commands.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod book_actor;
pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod member_actor;
pub mod model;
