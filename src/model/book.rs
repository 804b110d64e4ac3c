//! Catalog entries.
//!
//! [`Book`] implements the [`ActorEntity`](crate::framework::ActorEntity) trait, allowing it
//! to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
//!
//! See [`impl ActorEntity for Book`](crate::book_actor::entity) for details on:
//! - Creation parameters ([`BookCreate`])
//! - Custom actions ([`BookAction`](crate::book_actor::BookAction))

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Caller-chosen identifier for Books (e.g. `"B001"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BookId(pub String);

impl BookId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BookId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for BookId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Total and available copies of one book at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyCounts {
    pub total: u32,
    pub available: u32,
}

impl CopyCounts {
    /// Copies currently lent out.
    pub fn on_loan(&self) -> u32 {
        self.total.saturating_sub(self.available)
    }
}

/// Converts a signed copy count from the outside world, clamping negatives to zero.
fn clamp_count(n: i64) -> u32 {
    u32::try_from(n.max(0)).unwrap_or(u32::MAX)
}

/// Catalog entry. `id`, `title` and `author` never change after creation; the copy
/// counts move only through the four copy operations and always satisfy
/// `available_copies <= total_copies`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    id: BookId,
    title: String,
    author: String,
    total_copies: u32,
    available_copies: u32,
}

impl Book {
    /// Creates a book with every copy available. A negative `copies` becomes zero.
    pub fn new(
        id: impl Into<BookId>,
        title: impl Into<String>,
        author: impl Into<String>,
        copies: i64,
    ) -> Self {
        let copies = clamp_count(copies);
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            total_copies: copies,
            available_copies: copies,
        }
    }

    pub fn id(&self) -> &BookId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn total_copies(&self) -> u32 {
        self.total_copies
    }

    pub fn available_copies(&self) -> u32 {
        self.available_copies
    }

    pub fn copies(&self) -> CopyCounts {
        CopyCounts {
            total: self.total_copies,
            available: self.available_copies,
        }
    }

    /// True while at least one copy is lent out.
    pub fn has_outstanding_loans(&self) -> bool {
        self.available_copies < self.total_copies
    }

    /// Takes one copy off the shelf. Returns `false` and changes nothing when none is available.
    pub fn borrow(&mut self) -> bool {
        if self.available_copies > 0 {
            self.available_copies -= 1;
            true
        } else {
            false
        }
    }

    /// Puts one copy back. Refused when every copy is already on the shelf, so a stray
    /// return can never push availability above the total.
    pub fn return_copy(&mut self) -> bool {
        if self.available_copies < self.total_copies {
            self.available_copies += 1;
            true
        } else {
            false
        }
    }

    /// Adds `n` new copies, all available. No-op for `n <= 0`.
    pub fn add_copies(&mut self, n: i64) {
        if n <= 0 {
            return;
        }
        let n = clamp_count(n);
        self.total_copies = self.total_copies.saturating_add(n);
        self.available_copies = self.available_copies.saturating_add(n);
    }

    /// Withdraws up to `n` copies, taking shelf copies before lent ones. No-op for `n <= 0`.
    pub fn remove_copies(&mut self, n: i64) {
        if n <= 0 {
            return;
        }
        let remove = clamp_count(n).min(self.total_copies);
        let from_shelf = remove.min(self.available_copies);
        self.available_copies = self.available_copies.saturating_sub(from_shelf);
        self.total_copies = self.total_copies.saturating_sub(remove);
    }

    /// Case-insensitive substring match on the title. An empty query matches.
    pub fn title_contains(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(&query.to_lowercase())
    }

    /// Case-insensitive substring match on the author. An empty query matches.
    pub fn author_contains(&self, query: &str) -> bool {
        self.author.to_lowercase().contains(&query.to_lowercase())
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} by {} (Available: {}/{})",
            self.id, self.title, self.author, self.available_copies, self.total_copies
        )
    }
}

/// Payload for adding a book to the catalog.
#[derive(Debug, Clone)]
pub struct BookCreate {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub copies: i64,
}

impl BookCreate {
    pub fn new(
        id: impl Into<BookId>,
        title: impl Into<String>,
        author: impl Into<String>,
        copies: i64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            copies,
        }
    }
}
