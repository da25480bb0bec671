//! panchangam_client - CLI client for the panchangam API.

pub mod cli;
pub mod client;
pub mod error;
pub mod narrator;
pub mod output;

pub use client::PanchangamClient;
pub use error::{ClientError, Result};
