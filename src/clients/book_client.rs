//! # Book Client
//!
//! High-level API for the catalog. Wraps a `ResourceClient<Book>` and turns store
//! rejections (duplicate id, unknown id) into plain values.

use crate::book_actor::{BookAction, BookActionResult, BookError};
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Book, BookCreate, BookId, CopyCounts};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Book actor.
#[derive(Clone)]
pub struct BookClient {
    inner: ResourceClient<Book>,
}

impl_basic_client!(BookClient, Book, BookError, book);

#[async_trait]
impl ActorClient<Book> for BookClient {
    type Error = BookError;

    fn inner(&self) -> &ResourceClient<Book> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => BookError::NotFound(id),
            FrameworkError::EntityError(source) => match source.downcast_ref::<BookError>() {
                Some(book_error) => book_error.clone(),
                None => BookError::ActorCommunicationError(source.to_string()),
            },
            other => BookError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl BookClient {
    /// Adds a book. Returns `false`, leaving the existing entry untouched, when the id is taken.
    #[instrument(skip(self))]
    pub async fn add_book(&self, params: BookCreate) -> Result<bool, BookError> {
        debug!("Sending request");
        match self.inner.create(params).await {
            Ok(_) => Ok(true),
            Err(FrameworkError::AlreadyExists(_)) => Ok(false),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Every book, sorted by title then id.
    #[instrument(skip(self))]
    pub async fn list_books(&self) -> Result<Vec<Book>, BookError> {
        let mut books = self.list().await?;
        books.sort_by(|a, b| a.title().cmp(b.title()).then_with(|| a.id().cmp(b.id())));
        Ok(books)
    }

    /// Books whose title contains `query`, ignoring case, ordered by id.
    #[instrument(skip(self))]
    pub async fn search_by_title(&self, query: &str) -> Result<Vec<Book>, BookError> {
        self.search(|book| book.title_contains(query)).await
    }

    /// Books whose author contains `query`, ignoring case, ordered by id.
    #[instrument(skip(self))]
    pub async fn search_by_author(&self, query: &str) -> Result<Vec<Book>, BookError> {
        self.search(|book| book.author_contains(query)).await
    }

    async fn search(&self, matches: impl Fn(&Book) -> bool) -> Result<Vec<Book>, BookError> {
        let mut found: Vec<Book> = self.list().await?.into_iter().filter(|b| matches(b)).collect();
        found.sort_by(|a, b| a.id().cmp(b.id()));
        debug!(hits = found.len(), "Search done");
        Ok(found)
    }

    /// Takes one copy off the shelf. `Ok(false)` when none is available.
    #[instrument(skip(self))]
    pub async fn borrow_copy(&self, id: BookId) -> Result<bool, BookError> {
        debug!("Borrowing a copy of {}", id);
        match self.action(id, BookAction::Borrow).await? {
            BookActionResult::Borrow(taken) => Ok(taken),
            other => Err(unexpected(other)),
        }
    }

    /// Puts one copy back. `Ok(false)` when every copy was already on the shelf.
    #[instrument(skip(self))]
    pub async fn return_copy(&self, id: BookId) -> Result<bool, BookError> {
        debug!("Returning a copy of {}", id);
        match self.action(id, BookAction::ReturnCopy).await? {
            BookActionResult::ReturnCopy(restored) => Ok(restored),
            other => Err(unexpected(other)),
        }
    }

    /// Adds `n` copies. `Ok(None)` when the book is unknown.
    #[instrument(skip(self))]
    pub async fn add_copies(&self, id: BookId, n: i64) -> Result<Option<CopyCounts>, BookError> {
        match self.action(id, BookAction::AddCopies(n)).await {
            Ok(BookActionResult::AddCopies(counts)) => Ok(Some(counts)),
            Ok(other) => Err(unexpected(other)),
            Err(BookError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Withdraws up to `n` copies. `Ok(None)` when the book is unknown.
    #[instrument(skip(self))]
    pub async fn remove_copies(&self, id: BookId, n: i64) -> Result<Option<CopyCounts>, BookError> {
        match self.action(id, BookAction::RemoveCopies(n)).await {
            Ok(BookActionResult::RemoveCopies(counts)) => Ok(Some(counts)),
            Ok(other) => Err(unexpected(other)),
            Err(BookError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn action(&self, id: BookId, action: BookAction) -> Result<BookActionResult, BookError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }
}

fn unexpected(result: BookActionResult) -> BookError {
    BookError::UnexpectedResponse(format!("{result:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{
        create_mock_client, expect_action, expect_delete, expect_get, MockClient,
    };

    #[tokio::test]
    async fn test_borrow_copy_sends_borrow_action() {
        let (client, mut receiver) = create_mock_client::<Book>(10);
        let book_client = BookClient::new(client);

        let task = tokio::spawn(async move { book_client.borrow_copy(BookId::from("B001")).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, BookId::from("B001"));
        assert!(matches!(action, BookAction::Borrow));
        responder.send(Ok(BookActionResult::Borrow(false))).unwrap();

        assert_eq!(task.await.unwrap(), Ok(false));
    }

    #[tokio::test]
    async fn test_add_copies_on_unknown_book_is_none() {
        let (client, mut receiver) = create_mock_client::<Book>(10);
        let book_client = BookClient::new(client);

        let task =
            tokio::spawn(async move { book_client.add_copies(BookId::from("B404"), 2).await });

        let (_, action, responder) = expect_action(&mut receiver).await.unwrap();
        assert!(matches!(action, BookAction::AddCopies(2)));
        responder
            .send(Err(FrameworkError::NotFound("B404".to_string())))
            .unwrap();

        assert_eq!(task.await.unwrap(), Ok(None));
    }

    #[tokio::test]
    async fn test_mismatched_result_is_an_error() {
        let (client, mut receiver) = create_mock_client::<Book>(10);
        let book_client = BookClient::new(client);

        let task = tokio::spawn(async move { book_client.return_copy(BookId::from("B001")).await });

        let (_, _, responder) = expect_action(&mut receiver).await.unwrap();
        responder.send(Ok(BookActionResult::Borrow(true))).unwrap();

        assert!(matches!(
            task.await.unwrap(),
            Err(BookError::UnexpectedResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_refused_removal_is_false() {
        let (client, mut receiver) = create_mock_client::<Book>(10);
        let book_client = BookClient::new(client);

        let task = tokio::spawn(async move { book_client.remove_book(BookId::from("B001")).await });

        let (id, responder) = expect_delete(&mut receiver).await.unwrap();
        assert_eq!(id, BookId::from("B001"));
        let refusal = BookError::OutstandingLoans {
            id: "B001".to_string(),
            on_loan: 1,
        };
        responder
            .send(Err(FrameworkError::EntityError(Box::new(refusal))))
            .unwrap();

        assert_eq!(task.await.unwrap(), Ok(false));
    }

    #[tokio::test]
    async fn test_closed_actor_is_an_error() {
        let (client, receiver) = create_mock_client::<Book>(10);
        drop(receiver);
        let book_client = BookClient::new(client);

        let result = book_client.find_book(BookId::from("B001")).await;
        assert!(matches!(result, Err(BookError::ActorCommunicationError(_))));
    }

    #[tokio::test]
    async fn test_list_books_sorts_by_title_then_id() {
        let mut mock = MockClient::<Book>::new();
        mock.expect_list().return_ok(vec![
            Book::new("B003", "Effective Java", "Joshua Bloch", 1),
            Book::new("B009", "Clean Code", "Someone Else", 1),
            Book::new("B002", "Clean Code", "Robert C. Martin", 2),
        ]);

        let client = BookClient::new(mock.client());
        let ids: Vec<String> = client
            .list_books()
            .await
            .unwrap()
            .iter()
            .map(|b| b.id().to_string())
            .collect();

        assert_eq!(ids, ["B002", "B009", "B003"]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_find_book_returns_snapshot() {
        let (client, mut receiver) = create_mock_client::<Book>(10);
        let book_client = BookClient::new(client);

        let task = tokio::spawn(async move { book_client.find_book(BookId::from("B002")).await });

        let (id, responder) = expect_get(&mut receiver)
            .await
            .expect("Expected Get request");
        assert_eq!(id, BookId::from("B002"));
        let book = Book::new("B002", "Clean Code", "Robert C. Martin", 2);
        responder.send(Ok(Some(book.clone()))).unwrap();

        assert_eq!(task.await.unwrap(), Ok(Some(book)));
    }
}
