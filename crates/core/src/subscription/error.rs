use thiserror::Error;

/// Errors that can occur when validating or manipulating subscriptions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubscriptionError {
    #[error("User ID is required")]
    MissingUserId,
    #[error("Calendar name cannot be empty")]
    EmptyCalendarName,
    #[error("Calendar name too long (max 100 characters)")]
    CalendarNameTooLong,
    #[error("Calendar name contains invalid characters")]
    InvalidCalendarName,
    #[error("Date range must be between 1 and {max} days, got {days}")]
    InvalidDateRange { days: u32, max: u32 },
    #[error("No update data provided")]
    EmptyUpdate,
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscription_error_display() {
        assert_eq!(
            SubscriptionError::MissingUserId.to_string(),
            "User ID is required"
        );
        assert_eq!(
            SubscriptionError::EmptyUpdate.to_string(),
            "No update data provided"
        );
        assert_eq!(
            SubscriptionError::InvalidDateRange { days: 900, max: 730 }.to_string(),
            "Date range must be between 1 and 730 days, got 900"
        );
    }
}
