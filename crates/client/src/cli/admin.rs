//! Admin CLI commands.

use clap::{Parser, Subcommand};

/// Admin commands.
#[derive(Debug, Parser)]
pub struct AdminCommand {
    #[command(subcommand)]
    pub action: AdminAction,
}

/// Available admin actions.
#[derive(Debug, Subcommand)]
pub enum AdminAction {
    /// Subscription statistics, subscriptions and preferences.
    Overview,
}
