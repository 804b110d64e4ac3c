//! Pure data structures implementing the [`ActorEntity`](crate::framework::ActorEntity) trait,
//! plus the status values returned by borrow and return.

pub mod book;
pub mod member;
pub mod status;

pub use book::*;
pub use member::*;
pub use status::*;
