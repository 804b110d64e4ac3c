use library_inventory::lifecycle::{LibrarySystem, SystemConfig};
use library_inventory::model::{BookId, BorrowStatus, CopyCounts, ReturnStatus};
use std::sync::Arc;

/// Seeds the three books and two members used throughout these tests.
async fn seeded() -> LibrarySystem {
    let system = LibrarySystem::new();
    for (id, title, author, copies) in [
        ("B001", "Introduction to Algorithms", "Cormen", 3),
        ("B002", "Clean Code", "Robert C. Martin", 2),
        ("B003", "Effective Java", "Joshua Bloch", 1),
    ] {
        assert!(system.add_book(id, title, author, copies).await.unwrap());
    }
    assert!(system.add_member("M001", "Rishi").await.unwrap());
    assert!(system.add_member("M002", "Anjali").await.unwrap());
    system
}

async fn counts(system: &LibrarySystem, id: &str) -> (u32, u32) {
    let book = system.find_book(id).await.unwrap().expect("book exists");
    (book.total_copies(), book.available_copies())
}

/// Full end-to-end run with both real actors.
#[tokio::test]
async fn test_full_lending_cycle() {
    let system = seeded().await;

    assert_eq!(system.borrow("M001", "B001").await.unwrap(), BorrowStatus::Borrowed);
    assert_eq!(counts(&system, "B001").await, (3, 2));
    let rishi = system.find_member("M001").await.unwrap().unwrap();
    assert_eq!(rishi.borrowed_books(), &[BookId::from("B001")]);

    assert_eq!(system.return_book("M001", "B001").await.unwrap(), ReturnStatus::Returned);
    assert_eq!(counts(&system, "B001").await, (3, 3));
    let rishi = system.find_member("M001").await.unwrap().unwrap();
    assert!(rishi.borrowed_books().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_three_copies_three_borrowers() {
    let system = LibrarySystem::new();
    system.add_book("B001", "Intro", "X", 3).await.unwrap();
    assert_eq!(counts(&system, "B001").await, (3, 3));
    for id in ["M001", "M002", "M003", "M004"] {
        system.add_member(id, id).await.unwrap();
    }

    for id in ["M001", "M002", "M003"] {
        assert_eq!(system.borrow(id, "B001").await.unwrap(), BorrowStatus::Borrowed);
    }
    assert_eq!(counts(&system, "B001").await, (3, 0));
    assert_eq!(
        system.borrow("M004", "B001").await.unwrap(),
        BorrowStatus::NoCopiesAvailable
    );

    assert_eq!(system.return_book("M002", "B001").await.unwrap(), ReturnStatus::Returned);
    assert_eq!(counts(&system, "B001").await, (3, 1));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_last_copy_goes_to_first_borrower() {
    let system = seeded().await;

    assert_eq!(system.borrow("M002", "B003").await.unwrap(), BorrowStatus::Borrowed);
    assert_eq!(
        system.borrow("M001", "B003").await.unwrap(),
        BorrowStatus::NoCopiesAvailable
    );
    assert_eq!(counts(&system, "B003").await, (1, 0));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_borrow_and_return_statuses() {
    let system = seeded().await;

    assert_eq!(system.borrow("M404", "B001").await.unwrap(), BorrowStatus::MemberNotFound);
    assert_eq!(system.borrow("M001", "B404").await.unwrap(), BorrowStatus::BookNotFound);
    assert_eq!(system.return_book("M404", "B001").await.unwrap(), ReturnStatus::MemberNotFound);
    assert_eq!(system.return_book("M001", "B404").await.unwrap(), ReturnStatus::BookNotFound);
    assert_eq!(system.return_book("M002", "B002").await.unwrap(), ReturnStatus::NotBorrowed);
    assert_eq!(counts(&system, "B002").await, (2, 2));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_double_borrow_is_refused() {
    let system = seeded().await;

    assert_eq!(system.borrow("M001", "B001").await.unwrap(), BorrowStatus::Borrowed);
    assert_eq!(
        system.borrow("M001", "B001").await.unwrap(),
        BorrowStatus::AlreadyBorrowed
    );
    assert_eq!(counts(&system, "B001").await, (3, 2));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_duplicate_ids_keep_first_record() {
    let system = seeded().await;

    assert!(!system.add_book("B001", "Other", "Someone", 9).await.unwrap());
    assert!(!system.add_member("M001", "Someone").await.unwrap());

    let book = system.find_book("B001").await.unwrap().unwrap();
    assert_eq!(book.title(), "Introduction to Algorithms");
    assert_eq!(book.total_copies(), 3);
    let member = system.find_member("M001").await.unwrap().unwrap();
    assert_eq!(member.name(), "Rishi");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_copy_adjustments() {
    let system = seeded().await;

    assert_eq!(system.borrow("M001", "B002").await.unwrap(), BorrowStatus::Borrowed);
    assert_eq!(
        system.remove_copies("B002", 5).await.unwrap(),
        Some(CopyCounts { total: 0, available: 0 })
    );

    // the lent copy was withdrawn, so it cannot go back on the shelf
    assert_eq!(system.return_book("M001", "B002").await.unwrap(), ReturnStatus::Returned);
    assert_eq!(counts(&system, "B002").await, (0, 0));
    let rishi = system.find_member("M001").await.unwrap().unwrap();
    assert!(rishi.borrowed_books().is_empty());

    assert_eq!(
        system.add_copies("B002", 2).await.unwrap(),
        Some(CopyCounts { total: 2, available: 2 })
    );
    assert_eq!(
        system.add_copies("B003", -4).await.unwrap(),
        Some(CopyCounts { total: 1, available: 1 })
    );
    assert_eq!(system.add_copies("B404", 1).await.unwrap(), None);
    assert_eq!(system.remove_copies("B404", 1).await.unwrap(), None);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_loan_on_removed_book_can_still_be_returned() {
    let system = LibrarySystem::new();
    system.add_book("B001", "Intro", "X", 2).await.unwrap();
    system.add_member("M001", "Rishi").await.unwrap();
    assert_eq!(system.borrow("M001", "B001").await.unwrap(), BorrowStatus::Borrowed);

    assert_eq!(
        system.remove_copies("B001", 5).await.unwrap(),
        Some(CopyCounts { total: 0, available: 0 })
    );
    assert!(system.remove_book("B001").await.unwrap());

    assert_eq!(system.return_book("M001", "B001").await.unwrap(), ReturnStatus::Returned);
    let rishi = system.find_member("M001").await.unwrap().unwrap();
    assert!(rishi.borrowed_books().is_empty());
    assert!(system.remove_member("M001").await.unwrap());

    // a member who never held it still gets BookNotFound
    system.add_member("M002", "Anjali").await.unwrap();
    assert_eq!(
        system.return_book("M002", "B001").await.unwrap(),
        ReturnStatus::BookNotFound
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_remove_copies_without_loans() {
    let system = LibrarySystem::new();
    system.add_book("B002", "Clean Code", "Robert C. Martin", 2).await.unwrap();
    system.remove_copies("B002", 1).await.unwrap();
    assert_eq!(counts(&system, "B002").await, (1, 1));

    system.remove_copies("B002", 5).await.unwrap();
    assert_eq!(counts(&system, "B002").await, (0, 0));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_search_and_listing_order() {
    let system = seeded().await;

    let hits = system.search_by_title("clean").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id(), &BookId::from("B002"));

    let hits = system.search_by_author("J").await.unwrap();
    let ids: Vec<&str> = hits.iter().map(|b| b.id().as_str()).collect();
    assert_eq!(ids, ["B003"]);

    let hits = system.search_by_author("").await.unwrap();
    let ids: Vec<&str> = hits.iter().map(|b| b.id().as_str()).collect();
    assert_eq!(ids, ["B001", "B002", "B003"]);

    let titles: Vec<String> = system
        .list_books()
        .await
        .unwrap()
        .iter()
        .map(|b| b.title().to_string())
        .collect();
    assert_eq!(titles, ["Clean Code", "Effective Java", "Introduction to Algorithms"]);

    let names: Vec<String> = system
        .list_members()
        .await
        .unwrap()
        .iter()
        .map(|m| m.name().to_string())
        .collect();
    assert_eq!(names, ["Anjali", "Rishi"]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_removal_refused_while_lending() {
    let system = seeded().await;
    system.borrow("M001", "B003").await.unwrap();

    assert!(!system.remove_book("B003").await.unwrap());
    assert!(!system.remove_member("M001").await.unwrap());

    system.return_book("M001", "B003").await.unwrap();
    assert!(system.remove_book("B003").await.unwrap());
    assert!(system.remove_member("M001").await.unwrap());
    assert!(system.find_book("B003").await.unwrap().is_none());
    assert!(!system.remove_member("M001").await.unwrap());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_display_formats() {
    let system = seeded().await;
    system.borrow("M001", "B001").await.unwrap();

    let book = system.find_book("B001").await.unwrap().unwrap();
    assert_eq!(
        book.to_string(),
        "[B001] Introduction to Algorithms by Cormen (Available: 2/3)"
    );
    let member = system.find_member("M001").await.unwrap().unwrap();
    assert_eq!(member.to_string(), "Rishi (M001) - Borrowed: 1");

    system.shutdown().await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_borrows_never_exceed_copies() {
    let system = Arc::new(LibrarySystem::with_config(SystemConfig { buffer_size: 4 }));
    system.add_book("B001", "Introduction to Algorithms", "Cormen", 3).await.unwrap();
    for i in 0..10 {
        system.add_member(format!("M{i:03}"), format!("Reader {i}")).await.unwrap();
    }

    let mut tasks = Vec::new();
    for i in 0..10 {
        let system = Arc::clone(&system);
        tasks.push(tokio::spawn(async move {
            system.borrow(format!("M{i:03}"), "B001").await.unwrap()
        }));
    }

    let mut granted = 0;
    for task in tasks {
        match task.await.unwrap() {
            BorrowStatus::Borrowed => granted += 1,
            status => assert_eq!(status, BorrowStatus::NoCopiesAvailable),
        }
    }
    assert_eq!(granted, 3);
    assert_eq!(counts(&system, "B001").await, (3, 0));

    let holders = system
        .list_members()
        .await
        .unwrap()
        .iter()
        .filter(|m| m.borrowed_count() == 1)
        .count();
    assert_eq!(holders, 3);

    let system = Arc::try_unwrap(system).ok().expect("no other owners");
    system.shutdown().await.unwrap();
}
