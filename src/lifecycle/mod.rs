//! # System Lifecycle & Orchestration
//!
//! Starts, wires and stops the actors behind the library, and exposes the command
//! interface the outside world uses.
//!
//! ## Wiring
//!
//! ```text
//! LibrarySystem ──► MemberClient ──► member actor ──► BookClient ──► book actor
//!               └──────────────────► BookClient ───────────────────┘
//! ```
//!
//! The member actor receives a `BookClient` as its `Context` when it is started, so the
//! book actor is created first and never needs to know about members. The graph is
//! acyclic, which keeps shutdown simple.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the clients** held by the system, closing the member channel
//! 2. **Member actor exits** and drops its `BookClient`, closing the book channel
//! 3. **Book actor exits**
//! 4. **Await both tasks**, reporting a panic as [`LibraryError::Shutdown`]
//!
//! ## Configuration & Observability
//!
//! [`SystemConfig`] sets the channel capacity; [`setup_tracing`] installs the log
//! subscriber, controlled by `RUST_LOG`.

pub mod config;
pub mod error;
pub mod library_system;
pub mod tracing;

pub use config::*;
pub use error::*;
pub use library_system::*;
pub use self::tracing::setup_tracing;
