//! CLI command definitions.

pub mod admin;
pub mod almanac;
pub mod calendar;
pub mod health;
pub mod subscriptions;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the panchangam API.
#[derive(Debug, Parser)]
#[command(name = "panchangam-client")]
#[command(about = "CLI client for the panchangam API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "PANCHANGAM_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the almanac for one day.
    Day(almanac::DayArgs),
    /// List almanac rows in a date range.
    Range(almanac::RangeArgs),
    /// Download an ICS calendar.
    Ics(calendar::IcsArgs),
    /// Calendar subscription management.
    Subscriptions(subscriptions::SubscriptionsCommand),
    /// Admin views.
    Admin(admin::AdminCommand),
    /// Server health checks.
    Health(health::HealthCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_day_with_narration() {
        let cli = Cli::try_parse_from([
            "panchangam-client",
            "--format",
            "json",
            "day",
            "2025-09-15",
            "--narrate",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        let Commands::Day(args) = cli.command else {
            panic!("expected day command");
        };
        assert_eq!(args.date, NaiveDate::from_ymd_opt(2025, 9, 15).unwrap());
        assert!(args.narrate);
    }

    #[test]
    fn test_parse_ics_with_flags() {
        let cli = Cli::try_parse_from([
            "panchangam-client",
            "ics",
            "--output",
            "out.ics",
            "--start",
            "2025-09-01",
            "--no-inauspicious",
        ])
        .unwrap();

        let Commands::Ics(args) = cli.command else {
            panic!("expected ics command");
        };
        let query = args.export_query();
        assert_eq!(query.start_date, NaiveDate::from_ymd_opt(2025, 9, 1));
        assert_eq!(query.include_inauspicious, Some(false));
        assert_eq!(query.include_auspicious, None);
    }

    #[test]
    fn test_subscription_key_is_required() {
        let result = Cli::try_parse_from(["panchangam-client", "subscriptions", "get"]);
        assert!(result.is_err());

        let cli = Cli::try_parse_from([
            "panchangam-client",
            "subscriptions",
            "get",
            "--user-id",
            "user-1",
        ])
        .unwrap();
        let Commands::Subscriptions(cmd) = cli.command else {
            panic!("expected subscriptions command");
        };
        let subscriptions::SubscriptionsAction::Get { key } = cmd.action else {
            panic!("expected get action");
        };
        assert_eq!(
            key.key(),
            Some(panchangam_core::subscription::SubscriptionKey::UserId(
                "user-1".to_string()
            ))
        );
    }
}
