//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

#[macro_use]
mod macros;

pub mod book_client;
pub mod member_client;

pub use book_client::*;
pub use member_client::*;
