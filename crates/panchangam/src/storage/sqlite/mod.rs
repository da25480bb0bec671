//! SQLite storage backend implementation.
//!
//! Implements the repository traits using `rusqlite` for synchronous
//! operations and `tokio-rusqlite` for async wrapping. Period lists are
//! stored as JSON text columns.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
