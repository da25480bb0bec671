mod error;
mod http_mapping;
mod traits;
mod types;

pub use error::{DateRangeError, RepositoryError, Result};
pub use http_mapping::{
    date_range_error_to_status_code, repository_error_to_status_code,
    subscription_error_to_status_code,
};
pub use traits::{AlmanacRepository, SubscriptionRepository};
pub use types::DateRange;
