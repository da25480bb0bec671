pub mod admin;
pub mod almanac;
pub mod calendar;
pub mod error;
pub mod health;
pub mod pages;
pub mod subscription;

pub use error::{ApiError, AppError};
