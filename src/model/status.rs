//! Outcomes of borrow and return requests.
//!
//! These are values, not errors: every outcome leaves the system consistent and is
//! reported to the caller as-is. `Display` renders the text shown to end users.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BorrowStatus {
    Borrowed,
    MemberNotFound,
    BookNotFound,
    NoCopiesAvailable,
    /// The member already holds a copy of this book.
    AlreadyBorrowed,
}

impl BorrowStatus {
    pub fn is_success(self) -> bool {
        self == Self::Borrowed
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Borrowed => "Borrowed successfully",
            Self::MemberNotFound => "Member not found",
            Self::BookNotFound => "Book not found",
            Self::NoCopiesAvailable => "No copies available",
            Self::AlreadyBorrowed => "Member already borrowed this book",
        }
    }
}

impl Display for BorrowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReturnStatus {
    Returned,
    MemberNotFound,
    BookNotFound,
    NotBorrowed,
}

impl ReturnStatus {
    pub fn is_success(self) -> bool {
        self == Self::Returned
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Returned => "Returned successfully",
            Self::MemberNotFound => "Member not found",
            Self::BookNotFound => "Book not found",
            Self::NotBorrowed => "Member did not borrow this book",
        }
    }
}

impl Display for ReturnStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
