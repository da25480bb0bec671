//! Almanac CLI commands.

use chrono::NaiveDate;
use clap::Args;

/// Arguments for `day`.
#[derive(Debug, Args)]
pub struct DayArgs {
    /// Date (YYYY-MM-DD).
    pub date: NaiveDate,
    /// Read the day's narration aloud (printed line by line).
    #[arg(long)]
    pub narrate: bool,
}

/// Arguments for `range`.
#[derive(Debug, Args)]
pub struct RangeArgs {
    /// Start date (YYYY-MM-DD), default today.
    #[arg(long)]
    pub start: Option<NaiveDate>,
    /// End date (YYYY-MM-DD), default the start date.
    #[arg(long)]
    pub end: Option<NaiveDate>,
}
