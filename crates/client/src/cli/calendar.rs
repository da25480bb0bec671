//! ICS download command.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;

use crate::client::calendar::IcsExportQuery;

/// Arguments for `ics`.
///
/// With `--token` the subscription's stored preferences apply and every
/// other filter is ignored.
#[derive(Debug, Args)]
pub struct IcsArgs {
    /// File to write the calendar to.
    #[arg(long, short)]
    pub output: PathBuf,
    /// Subscription token.
    #[arg(long, conflicts_with_all = ["start", "end", "calendar_name"])]
    pub token: Option<String>,
    /// Download the built-in sample day instead.
    #[arg(long, conflicts_with_all = ["token", "start", "end", "calendar_name"])]
    pub sample: bool,
    /// Start date (YYYY-MM-DD), default today.
    #[arg(long)]
    pub start: Option<NaiveDate>,
    /// End date (YYYY-MM-DD), default a year after the start.
    #[arg(long)]
    pub end: Option<NaiveDate>,
    /// Calendar display name.
    #[arg(long)]
    pub calendar_name: Option<String>,
    /// Leave out Abhijit Muhurta.
    #[arg(long)]
    pub no_auspicious: bool,
    /// Leave out Rahu Kalam, Yamagandam and Kuligai.
    #[arg(long)]
    pub no_inauspicious: bool,
    /// Leave out special days.
    #[arg(long)]
    pub no_special_days: bool,
    /// Leave out the daily nakshatra.
    #[arg(long)]
    pub no_nakshatra: bool,
    /// Leave out RS nakshatra warnings.
    #[arg(long)]
    pub no_rs_warnings: bool,
    /// Leave out chandrashtama warnings.
    #[arg(long)]
    pub no_chandrashtama: bool,
}

impl IcsArgs {
    /// Query for an ad hoc export. Flags that were not given are left to the
    /// server default.
    pub fn export_query(&self) -> IcsExportQuery {
        let off = |flag: bool| flag.then_some(false);
        IcsExportQuery {
            start_date: self.start,
            end_date: self.end,
            include_auspicious: off(self.no_auspicious),
            include_inauspicious: off(self.no_inauspicious),
            include_special_days: off(self.no_special_days),
            include_nakshatra: off(self.no_nakshatra),
            include_rs_warnings: off(self.no_rs_warnings),
            include_chandrashtama: off(self.no_chandrashtama),
            calendar_name: self.calendar_name.clone(),
        }
    }
}
