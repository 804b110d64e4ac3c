//! Custom actions for the Book actor.
//!
//! Copy-count operations on a [`Book`](crate::model::Book) beyond plain create/remove.
//! Handled by [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action).

use crate::model::CopyCounts;

/// Custom actions for Book entities.
#[derive(Debug, Clone)]
pub enum BookAction {
    /// Takes one copy off the shelf if any is available.
    Borrow,
    /// Puts one lent copy back.
    ReturnCopy,
    /// Adds copies; ignored for non-positive amounts.
    AddCopies(i64),
    /// Withdraws copies, shelf copies first; ignored for non-positive amounts.
    RemoveCopies(i64),
}

/// Results from BookActions - variants match 1:1 with BookAction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookActionResult {
    /// `false` when no copy was available.
    Borrow(bool),
    /// `false` when every copy was already on the shelf.
    ReturnCopy(bool),
    AddCopies(CopyCounts),
    RemoveCopies(CopyCounts),
}
