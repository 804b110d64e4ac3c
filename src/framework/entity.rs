//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every resource (Book, Member) implements to be
//! owned by a generic [`ResourceActor`](crate::framework::ResourceActor). It names the
//! associated types for ids, creation payloads, actions, context and errors, and provides
//! the lifecycle hooks (`on_create`, `on_delete`, `handle_action`).
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! Both default to `Ok(())`. Override `on_delete` to veto a removal.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Identity
/// Ids are chosen by the caller, not generated by the actor. The actor reads the id of a
/// freshly built entity through [`ActorEntity::id`] and refuses to insert it when the id
/// is already taken.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so they can call other actors. The `Context` value is handed
/// to `run()` and injected into every hook, which lets an actor depend on clients that
/// were created after it.
#[async_trait]
pub trait ActorEntity: Clone + Debug + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Enum of resource-specific operations (e.g. `Borrow`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One error enum per actor rather than one per action; callers match on a single
    /// type whatever the operation.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from its creation payload.
    fn from_create_params(params: Self::Create) -> Result<Self, Self::Error>;

    /// The id under which this entity is stored.
    fn id(&self) -> Self::Id;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is built and before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called before the entity is removed. Returning an error keeps it in the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
