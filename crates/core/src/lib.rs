//! Functional core for the panchangam service.
//!
//! Everything in this crate is pure: almanac types and lookup tables, the
//! iCalendar formatter, subscription rules, and the repository traits that
//! the server implements. No module here performs I/O.

pub mod almanac;
pub mod ics;
pub mod serde;
pub mod storage;
pub mod subscription;
