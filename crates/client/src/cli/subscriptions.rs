//! Subscription CLI commands.

use clap::{Args, Parser, Subcommand};

use panchangam_core::subscription::{
    CreateSubscriptionRequest, SubscriptionKey, UpdateSubscriptionRequest,
};

/// Subscription management commands.
#[derive(Debug, Parser)]
pub struct SubscriptionsCommand {
    #[command(subcommand)]
    pub action: SubscriptionsAction,
}

/// Selects a subscription by token or user id.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct KeyArgs {
    /// Subscription token.
    #[arg(long)]
    pub token: Option<String>,
    /// User id.
    #[arg(long)]
    pub user_id: Option<String>,
}

impl KeyArgs {
    pub fn key(&self) -> Option<SubscriptionKey> {
        SubscriptionKey::from_query(self.token.as_deref(), self.user_id.as_deref())
    }
}

/// Preference fields shared by create and update. Unset fields are not sent.
#[derive(Debug, Args)]
pub struct PreferenceArgs {
    /// Calendar display name.
    #[arg(long)]
    pub calendar_name: Option<String>,
    /// Include Abhijit Muhurta.
    #[arg(long)]
    pub auspicious: Option<bool>,
    /// Include Rahu Kalam, Yamagandam and Kuligai.
    #[arg(long)]
    pub inauspicious: Option<bool>,
    /// Include special days.
    #[arg(long)]
    pub special_days: Option<bool>,
    /// Include the daily nakshatra.
    #[arg(long)]
    pub nakshatra: Option<bool>,
    /// Include RS nakshatra warnings.
    #[arg(long)]
    pub rs_warnings: Option<bool>,
    /// Include chandrashtama warnings.
    #[arg(long)]
    pub chandrashtama: Option<bool>,
    /// Days ahead the feed covers (1-730).
    #[arg(long)]
    pub days: Option<u32>,
}

impl PreferenceArgs {
    pub fn into_update(self) -> UpdateSubscriptionRequest {
        UpdateSubscriptionRequest {
            calendar_name: self.calendar_name,
            include_auspicious_times: self.auspicious,
            include_inauspicious_times: self.inauspicious,
            include_special_days: self.special_days,
            include_nakshatra: self.nakshatra,
            include_rs_warnings: self.rs_warnings,
            include_chandrashtama: self.chandrashtama,
            date_range_days: self.days,
        }
    }

    pub fn into_create(self, user_id: String) -> CreateSubscriptionRequest {
        CreateSubscriptionRequest {
            user_id,
            calendar_name: self.calendar_name,
            include_auspicious_times: self.auspicious,
            include_inauspicious_times: self.inauspicious,
            include_special_days: self.special_days,
            include_nakshatra: self.nakshatra,
            include_rs_warnings: self.rs_warnings,
            include_chandrashtama: self.chandrashtama,
            date_range_days: self.days,
        }
    }
}

/// Available subscription actions.
#[derive(Debug, Subcommand)]
pub enum SubscriptionsAction {
    /// Create a subscription for a user.
    Create {
        /// User id.
        #[arg(long)]
        user_id: String,
        #[command(flatten)]
        preferences: PreferenceArgs,
    },
    /// Show a subscription and its feed URLs.
    Get {
        #[command(flatten)]
        key: KeyArgs,
    },
    /// Update a subscription's preferences.
    Update {
        #[command(flatten)]
        key: KeyArgs,
        #[command(flatten)]
        preferences: PreferenceArgs,
    },
    /// Delete a subscription and its preferences.
    Delete {
        #[command(flatten)]
        key: KeyArgs,
    },
}
