//! Demo: seeds a small catalog and runs a few loans through [`LibrarySystem`].

use library_inventory::lifecycle::{setup_tracing, LibraryError, LibrarySystem, SystemConfig};
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), LibraryError> {
    setup_tracing();

    info!("Starting library system");
    let system = LibrarySystem::with_config(SystemConfig::from_env());

    let span = tracing::info_span!("seeding");
    async {
        system
            .add_book("B001", "Introduction to Algorithms", "Cormen", 3)
            .await?;
        system
            .add_book("B002", "Clean Code", "Robert C. Martin", 2)
            .await?;
        system
            .add_book("B003", "Effective Java", "Joshua Bloch", 1)
            .await?;
        system.add_member("M001", "Rishi").await?;
        system.add_member("M002", "Anjali").await?;
        Ok::<_, LibraryError>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("lending");
    async {
        for (member, book) in [("M001", "B001"), ("M002", "B003"), ("M001", "B003")] {
            let status = system.borrow(member, book).await?;
            println!("{member} borrows {book}: {status}");
        }
        let status = system.return_book("M002", "B003").await?;
        println!("M002 returns B003: {status}");
        let status = system.return_book("M002", "B002").await?;
        println!("M002 returns B002: {status}");
        Ok::<_, LibraryError>(())
    }
    .instrument(span)
    .await?;

    println!("\nCatalog:");
    for book in system.list_books().await? {
        println!("  {book}");
    }
    println!("\nMembers:");
    for member in system.list_members().await? {
        println!("  {member}");
    }
    println!("\nSearch \"clean\":");
    for book in system.search_by_title("clean").await? {
        println!("  {book}");
    }

    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}
