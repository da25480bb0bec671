//! Storage backend implementations.
//!
//! Concrete implementations of the repository traits defined in
//! `panchangam_core::storage`, selected at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): maps held in memory, lost on restart
//! - `sqlite`: SQLite storage using `rusqlite` and `tokio-rusqlite`
//! - `postgrest`: a hosted Postgres reached through its PostgREST row API
//!
//! These features are mutually exclusive.
//!
//! # Examples
//!
//! Build with SQLite:
//! ```bash
//! cargo build -p panchangam --no-default-features --features sqlite
//! ```

#[cfg(any(feature = "inmemory", test))]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "postgrest")]
pub mod postgrest;

#[cfg(any(feature = "inmemory", test))]
pub use inmemory::InMemoryRepository;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;

#[cfg(feature = "postgrest")]
pub use postgrest::PostgrestRepository;
