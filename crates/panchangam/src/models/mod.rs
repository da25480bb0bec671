mod almanac;
mod calendar;

use serde::Deserialize;

use panchangam_core::serde::deserialize_optional_string;
use panchangam_core::subscription::SubscriptionKey;

pub use almanac::{DayQuery, RangeQuery};
pub use calendar::{IcsQuery, TokenQuery};

/// `?token=` or `?user_id=` selecting a subscription.
#[derive(Debug, Default, Deserialize)]
pub struct KeyQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub token: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub user_id: Option<String>,
}

impl KeyQuery {
    pub fn key(&self) -> Option<SubscriptionKey> {
        SubscriptionKey::from_query(self.token.as_deref(), self.user_id.as_deref())
    }
}
