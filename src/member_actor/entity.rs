//! [`ActorEntity`] implementation for [`Member`].
//!
//! The member actor depends on the book actor (`Context = BookClient`). A borrow or return
//! runs as one action on the member actor, which handles nothing else for that member
//! until the book actor has answered and the loan list is updated.

use super::actions::{MemberAction, MemberActionResult};
use super::error::MemberError;
use crate::book_actor::BookError;
use crate::clients::BookClient;
use crate::framework::{ActorClient, ActorEntity};
use crate::model::{BookId, BorrowStatus, Member, MemberCreate, MemberId, ReturnStatus};
use async_trait::async_trait;
use tracing::{debug, warn};

impl Member {
    /// Checks run in order: book exists, member does not already hold it, a copy is free.
    async fn lend(
        &mut self,
        book_id: BookId,
        books: &BookClient,
    ) -> Result<BorrowStatus, MemberError> {
        if books.get(book_id.clone()).await?.is_none() {
            return Ok(BorrowStatus::BookNotFound);
        }
        if self.has_borrowed(&book_id) {
            return Ok(BorrowStatus::AlreadyBorrowed);
        }

        match books.borrow_copy(book_id.clone()).await {
            Ok(true) => {
                debug!(member_id = %Member::id(self), %book_id, "Loan recorded");
                self.borrow_book(book_id);
                Ok(BorrowStatus::Borrowed)
            }
            Ok(false) => Ok(BorrowStatus::NoCopiesAvailable),
            // removed between the lookup and the borrow
            Err(BookError::NotFound(_)) => Ok(BorrowStatus::BookNotFound),
            Err(e) => Err(e.into()),
        }
    }

    /// Checks run in order: book exists, member holds it. The copy goes back on the
    /// shelf before the loan is dropped, so a failed book actor leaves the loan in place.
    ///
    /// A loan on a book that has since left the catalog is still cleared and reported as
    /// returned; only a member who never held the book gets `BookNotFound`.
    async fn take_back(
        &mut self,
        book_id: BookId,
        books: &BookClient,
    ) -> Result<ReturnStatus, MemberError> {
        if books.get(book_id.clone()).await?.is_none() {
            if self.has_borrowed(&book_id) {
                return Ok(self.drop_orphaned_loan(&book_id));
            }
            return Ok(ReturnStatus::BookNotFound);
        }
        if !self.has_borrowed(&book_id) {
            return Ok(ReturnStatus::NotBorrowed);
        }

        match books.return_copy(book_id.clone()).await {
            Ok(restored) => {
                if !restored {
                    // copies were withdrawn while this one was out
                    warn!(member_id = %Member::id(self), %book_id, "Returned copy not shelved");
                }
                self.return_book(&book_id);
                Ok(ReturnStatus::Returned)
            }
            // removed between the lookup and the return
            Err(BookError::NotFound(_)) => Ok(self.drop_orphaned_loan(&book_id)),
            Err(e) => Err(e.into()),
        }
    }

    fn drop_orphaned_loan(&mut self, book_id: &BookId) -> ReturnStatus {
        warn!(member_id = %Member::id(self), %book_id, "Book left the catalog, loan cleared");
        self.return_book(book_id);
        ReturnStatus::Returned
    }
}

#[async_trait]
impl ActorEntity for Member {
    type Id = MemberId;
    type Create = MemberCreate;
    type Action = MemberAction;
    type ActionResult = MemberActionResult;
    type Context = BookClient;
    type Error = MemberError;

    fn from_create_params(params: MemberCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(params.id, params.name))
    }

    fn id(&self) -> MemberId {
        Member::id(self).clone()
    }

    async fn on_delete(&self, _ctx: &BookClient) -> Result<(), Self::Error> {
        if self.borrowed_count() > 0 {
            return Err(MemberError::OutstandingLoans {
                id: Member::id(self).to_string(),
                count: self.borrowed_count(),
            });
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: MemberAction,
        books: &BookClient,
    ) -> Result<MemberActionResult, Self::Error> {
        match action {
            MemberAction::Borrow(book_id) => {
                self.lend(book_id, books).await.map(MemberActionResult::Borrow)
            }
            MemberAction::Return(book_id) => self
                .take_back(book_id, books)
                .await
                .map(MemberActionResult::Return),
        }
    }
}
