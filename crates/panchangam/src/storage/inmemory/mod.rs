//! In-memory storage backend.
//!
//! Stores everything in maps wrapped in `Arc<RwLock<_>>`. Used by default in
//! development (together with `--seed-days`) and by the router tests.

mod repository;

pub use repository::InMemoryRepository;
