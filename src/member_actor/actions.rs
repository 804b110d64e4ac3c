//! Custom actions for the Member actor: the borrow and return workflows.

use crate::model::{BookId, BorrowStatus, ReturnStatus};

/// Custom actions for Member entities.
#[derive(Debug, Clone)]
pub enum MemberAction {
    /// Lend one copy of the book to this member.
    Borrow(BookId),
    /// Take back the member's copy of the book.
    Return(BookId),
}

/// Results from MemberActions - variants match 1:1 with MemberAction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberActionResult {
    Borrow(BorrowStatus),
    Return(ReturnStatus),
}
