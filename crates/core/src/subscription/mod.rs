mod error;
mod operations;
mod requests;
mod responses;
mod types;

pub use error::SubscriptionError;
pub use operations::{
    access_status, build_subscription_links, compute_stats, generate_subscription_token,
    validate_preference, AccessStatus, SubscriptionLinks, SubscriptionStats, MAX_DATE_RANGE_DAYS,
    TOKEN_LENGTH,
};
pub use requests::{CreateSubscriptionRequest, UpdateSubscriptionRequest};
pub use responses::{
    AdminOverview, CreateSubscriptionResponse, MessageResponse, SubscriptionDetails,
    SubscriptionOverview, UpdateSubscriptionResponse,
};
pub use types::{Subscription, SubscriptionKey, SubscriptionPreference, DEFAULT_DATE_RANGE_DAYS};
