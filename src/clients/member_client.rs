//! # Member Client
//!
//! High-level API for the member registry and the borrow/return workflows.

use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::member_actor::{MemberAction, MemberActionResult, MemberError};
use crate::model::{BookId, BorrowStatus, Member, MemberCreate, MemberId, ReturnStatus};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Member actor.
#[derive(Clone)]
pub struct MemberClient {
    inner: ResourceClient<Member>,
}

impl_basic_client!(MemberClient, Member, MemberError, member);

#[async_trait]
impl ActorClient<Member> for MemberClient {
    type Error = MemberError;

    fn inner(&self) -> &ResourceClient<Member> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => MemberError::NotFound(id),
            FrameworkError::EntityError(source) => match source.downcast_ref::<MemberError>() {
                Some(member_error) => member_error.clone(),
                None => MemberError::ActorCommunicationError(source.to_string()),
            },
            other => MemberError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl MemberClient {
    /// Registers a member. Returns `false`, leaving the existing one untouched, when the id is taken.
    #[instrument(skip(self))]
    pub async fn add_member(&self, params: MemberCreate) -> Result<bool, MemberError> {
        debug!("Sending request");
        match self.inner.create(params).await {
            Ok(_) => Ok(true),
            Err(FrameworkError::AlreadyExists(_)) => Ok(false),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Every member, sorted by name then id.
    #[instrument(skip(self))]
    pub async fn list_members(&self) -> Result<Vec<Member>, MemberError> {
        let mut members = self.list().await?;
        members.sort_by(|a, b| a.name().cmp(b.name()).then_with(|| a.id().cmp(b.id())));
        Ok(members)
    }

    /// Lends one copy of `book_id` to `member_id`.
    #[instrument(skip(self))]
    pub async fn borrow(
        &self,
        member_id: MemberId,
        book_id: BookId,
    ) -> Result<BorrowStatus, MemberError> {
        let status = match self
            .inner
            .perform_action(member_id, MemberAction::Borrow(book_id))
            .await
        {
            Ok(MemberActionResult::Borrow(status)) => status,
            Ok(other) => {
                return Err(MemberError::UnexpectedResponse(format!("{other:?}")));
            }
            Err(FrameworkError::NotFound(_)) => BorrowStatus::MemberNotFound,
            Err(e) => return Err(Self::map_error(e)),
        };
        info!(%status, "Borrow handled");
        Ok(status)
    }

    /// Takes back `member_id`'s copy of `book_id`.
    #[instrument(skip(self))]
    pub async fn return_book(
        &self,
        member_id: MemberId,
        book_id: BookId,
    ) -> Result<ReturnStatus, MemberError> {
        let status = match self
            .inner
            .perform_action(member_id, MemberAction::Return(book_id))
            .await
        {
            Ok(MemberActionResult::Return(status)) => status,
            Ok(other) => {
                return Err(MemberError::UnexpectedResponse(format!("{other:?}")));
            }
            Err(FrameworkError::NotFound(_)) => ReturnStatus::MemberNotFound,
            Err(e) => return Err(Self::map_error(e)),
        };
        info!(%status, "Return handled");
        Ok(status)
    }
}
