//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: `Actor started` / `Shutdown` with the final store size
//! - **Store operations**: `Create`, `Get`, `List`, `Delete`, `Action` at debug;
//!   successful changes at info; duplicates, refusals and unknown ids at warn
//! - **Client calls**: one span per call via `#[instrument]`, carrying the ids involved
//!
//! ```bash
//! RUST_LOG=info cargo run     # state changes only
//! RUST_LOG=debug cargo run    # every request with its payload
//! ```
//!
//! A borrow at `debug` reads roughly:
//!
//! ```text
//! DEBUG borrow: Action entity_type="Member" id=M001 action=Borrow(BookId("B001"))
//! DEBUG borrow:borrow_copy: Action entity_type="Book" id=B001 action=Borrow
//!  INFO borrow:borrow_copy: Action ok entity_type="Book" id=B001 outcome=Borrow(true)
//! DEBUG borrow: Loan recorded member_id=M001 book_id=B001
//!  INFO borrow: Borrow handled status=Borrowed successfully
//! ```

/// Installs the global subscriber. Later calls are no-ops.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type already names the actor
        .compact()
        .try_init();
}
