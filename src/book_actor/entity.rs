//! [`ActorEntity`] implementation for [`Book`].
//!
//! Books have no dependencies (`Context = ()`). Removal is refused while any copy is on
//! loan, so a member's loan list never points at a book that is gone.

use super::actions::{BookAction, BookActionResult};
use super::error::BookError;
use crate::framework::ActorEntity;
use crate::model::{Book, BookCreate, BookId};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Book {
    type Id = BookId;
    type Create = BookCreate;
    type Action = BookAction;
    type ActionResult = BookActionResult;
    type Context = ();
    type Error = BookError;

    fn from_create_params(params: BookCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(params.id, params.title, params.author, params.copies))
    }

    fn id(&self) -> BookId {
        Book::id(self).clone()
    }

    async fn on_delete(&self, _ctx: &()) -> Result<(), Self::Error> {
        if self.has_outstanding_loans() {
            return Err(BookError::OutstandingLoans {
                id: Book::id(self).to_string(),
                on_loan: self.copies().on_loan(),
            });
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: BookAction,
        _ctx: &(),
    ) -> Result<BookActionResult, Self::Error> {
        let result = match action {
            BookAction::Borrow => BookActionResult::Borrow(self.borrow()),
            BookAction::ReturnCopy => BookActionResult::ReturnCopy(self.return_copy()),
            BookAction::AddCopies(n) => {
                self.add_copies(n);
                BookActionResult::AddCopies(self.copies())
            }
            BookAction::RemoveCopies(n) => {
                self.remove_copies(n);
                BookActionResult::RemoveCopies(self.copies())
            }
        };
        Ok(result)
    }
}
