//! PostgREST storage backend.
//!
//! Reads and writes the hosted Postgres tables `daily_panchangam`,
//! `calendar_subscriptions` and `user_calendar_preferences` through the
//! PostgREST row API over HTTP.

mod error;
mod repository;

pub use repository::PostgrestRepository;
