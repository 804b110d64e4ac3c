use super::{LibraryError, SystemConfig};
use crate::clients::{BookClient, MemberClient};
use crate::model::{
    Book, BookCreate, BookId, BorrowStatus, CopyCounts, Member, MemberCreate, MemberId,
    ReturnStatus,
};
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The running library: a book actor, a member actor, and the command interface on top.
///
/// `LibrarySystem` is responsible for:
/// - **Lifecycle Management**: starting both actors and stopping them on [`shutdown`](Self::shutdown)
/// - **Dependency Wiring**: handing the member actor a [`BookClient`] as its context
/// - **Command Interface**: one method per library command, taking plain ids and strings
///
/// Domain outcomes come back as values (`bool`, `Option`, [`BorrowStatus`],
/// [`ReturnStatus`]). `Err` means an actor is gone.
///
/// # Example
///
/// ```no_run
/// use library_inventory::lifecycle::LibrarySystem;
/// use library_inventory::model::BorrowStatus;
///
/// # async fn demo() -> Result<(), library_inventory::lifecycle::LibraryError> {
/// let system = LibrarySystem::new();
/// system.add_book("B001", "Introduction to Algorithms", "Cormen", 3).await?;
/// system.add_member("M001", "Rishi").await?;
///
/// assert_eq!(system.borrow("M001", "B001").await?, BorrowStatus::Borrowed);
///
/// system.shutdown().await?;
/// # Ok(())
/// # }
/// ```
pub struct LibrarySystem {
    /// Client for the book actor.
    pub book_client: BookClient,

    /// Client for the member actor.
    pub member_client: MemberClient,

    /// Member actor first: it owns a `BookClient`, so the book actor outlives it.
    handles: Vec<JoinHandle<()>>,
}

impl LibrarySystem {
    /// Starts a system with [`SystemConfig::default`]. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        Self::with_config(SystemConfig::default())
    }

    pub fn with_config(config: SystemConfig) -> Self {
        let (book_actor, book_client) = crate::book_actor::new(config.buffer_size);
        let (member_actor, member_client) = crate::member_actor::new(config.buffer_size);

        let book_client = BookClient::new(book_client);
        let member_client = MemberClient::new(member_client);

        let book_handle = tokio::spawn(book_actor.run(()));
        let member_handle = tokio::spawn(member_actor.run(book_client.clone()));

        info!(buffer_size = config.buffer_size, "Library system started");

        Self {
            book_client,
            member_client,
            handles: vec![member_handle, book_handle],
        }
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// `false` when the id is already in the catalog. Negative copy counts become 0.
    pub async fn add_book(
        &self,
        id: impl Into<BookId>,
        title: impl Into<String>,
        author: impl Into<String>,
        copies: i64,
    ) -> Result<bool, LibraryError> {
        let params = BookCreate::new(id, title, author, copies);
        Ok(self.book_client.add_book(params).await?)
    }

    /// `false` when the book is unknown or copies are still on loan.
    pub async fn remove_book(&self, id: impl Into<BookId>) -> Result<bool, LibraryError> {
        Ok(self.book_client.remove_book(id.into()).await?)
    }

    pub async fn find_book(&self, id: impl Into<BookId>) -> Result<Option<Book>, LibraryError> {
        Ok(self.book_client.find_book(id.into()).await?)
    }

    pub async fn search_by_title(&self, query: &str) -> Result<Vec<Book>, LibraryError> {
        Ok(self.book_client.search_by_title(query).await?)
    }

    pub async fn search_by_author(&self, query: &str) -> Result<Vec<Book>, LibraryError> {
        Ok(self.book_client.search_by_author(query).await?)
    }

    pub async fn list_books(&self) -> Result<Vec<Book>, LibraryError> {
        Ok(self.book_client.list_books().await?)
    }

    /// Counts after the change, or `None` when the book is unknown.
    pub async fn add_copies(
        &self,
        id: impl Into<BookId>,
        n: i64,
    ) -> Result<Option<CopyCounts>, LibraryError> {
        Ok(self.book_client.add_copies(id.into(), n).await?)
    }

    /// Withdraws up to `n` copies, shelf copies first, then lent ones. Counts after the
    /// change, or `None` when the book is unknown.
    pub async fn remove_copies(
        &self,
        id: impl Into<BookId>,
        n: i64,
    ) -> Result<Option<CopyCounts>, LibraryError> {
        Ok(self.book_client.remove_copies(id.into(), n).await?)
    }

    // =========================================================================
    // Members
    // =========================================================================

    /// `false` when the id is already registered.
    pub async fn add_member(
        &self,
        id: impl Into<MemberId>,
        name: impl Into<String>,
    ) -> Result<bool, LibraryError> {
        Ok(self.member_client.add_member(MemberCreate::new(id, name)).await?)
    }

    /// `false` when the member is unknown or still holds books.
    pub async fn remove_member(&self, id: impl Into<MemberId>) -> Result<bool, LibraryError> {
        Ok(self.member_client.remove_member(id.into()).await?)
    }

    pub async fn find_member(
        &self,
        id: impl Into<MemberId>,
    ) -> Result<Option<Member>, LibraryError> {
        Ok(self.member_client.find_member(id.into()).await?)
    }

    pub async fn list_members(&self) -> Result<Vec<Member>, LibraryError> {
        Ok(self.member_client.list_members().await?)
    }

    // =========================================================================
    // Lending
    // =========================================================================

    pub async fn borrow(
        &self,
        member_id: impl Into<MemberId>,
        book_id: impl Into<BookId>,
    ) -> Result<BorrowStatus, LibraryError> {
        Ok(self
            .member_client
            .borrow(member_id.into(), book_id.into())
            .await?)
    }

    pub async fn return_book(
        &self,
        member_id: impl Into<MemberId>,
        book_id: impl Into<BookId>,
    ) -> Result<ReturnStatus, LibraryError> {
        Ok(self
            .member_client
            .return_book(member_id.into(), book_id.into())
            .await?)
    }

    /// Stops both actors and waits for their tasks.
    ///
    /// Clones of the clients handed out earlier keep their actor alive, so drop them first.
    pub async fn shutdown(self) -> Result<(), LibraryError> {
        info!("Shutting down library system...");

        // Closing the member channel ends the member actor, which drops the last
        // BookClient and ends the book actor in turn.
        drop(self.member_client);
        drop(self.book_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(LibraryError::Shutdown(e.to_string()));
            }
        }

        info!("Library system shutdown complete.");
        Ok(())
    }
}
