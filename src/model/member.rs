//! Registered members and the books they hold.
//!
//! [`Member`] implements the [`ActorEntity`](crate::framework::ActorEntity) trait; see
//! [`member_actor`](crate::member_actor) for the borrow and return actions.

use crate::model::BookId;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Caller-chosen identifier for Members (e.g. `"M001"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MemberId(pub String);

impl MemberId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MemberId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for MemberId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A member and the ids of the books currently lent to them.
///
/// Loans are kept in the order they were made, for display. Availability is not checked
/// here; the member actor does that against the book actor before recording a loan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    id: MemberId,
    name: String,
    borrowed: Vec<BookId>,
}

impl Member {
    pub fn new(id: impl Into<MemberId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            borrowed: Vec::new(),
        }
    }

    pub fn id(&self) -> &MemberId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read-only view of the current loans.
    pub fn borrowed_books(&self) -> &[BookId] {
        &self.borrowed
    }

    pub fn borrowed_count(&self) -> usize {
        self.borrowed.len()
    }

    pub fn has_borrowed(&self, book_id: &BookId) -> bool {
        self.borrowed.contains(book_id)
    }

    /// Records a loan.
    pub fn borrow_book(&mut self, book_id: BookId) {
        self.borrowed.push(book_id);
    }

    /// Drops one loan of `book_id`. Returns `false` if the member did not hold it.
    pub fn return_book(&mut self, book_id: &BookId) -> bool {
        match self.borrowed.iter().position(|held| held == book_id) {
            Some(index) => {
                self.borrowed.remove(index);
                true
            }
            None => false,
        }
    }
}

impl Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) - Borrowed: {}", self.name, self.id, self.borrowed.len())
    }
}

/// Payload for registering a member.
#[derive(Debug, Clone)]
pub struct MemberCreate {
    pub id: MemberId,
    pub name: String,
}

impl MemberCreate {
    pub fn new(id: impl Into<MemberId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
