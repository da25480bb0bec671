//! Subscription API operations.

use super::{key_query, PanchangamClient};
use crate::error::Result;
use panchangam_core::subscription::{
    CreateSubscriptionRequest, CreateSubscriptionResponse, MessageResponse, SubscriptionDetails,
    SubscriptionKey, UpdateSubscriptionRequest, UpdateSubscriptionResponse,
};

const SUBSCRIPTION_PATH: &str = "/api/calendar/subscription";

impl PanchangamClient {
    /// Create a subscription.
    pub async fn create_subscription(
        &self,
        req: &CreateSubscriptionRequest,
    ) -> Result<CreateSubscriptionResponse> {
        let response = self
            .client
            .post(self.url(SUBSCRIPTION_PATH))
            .json(req)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Get a subscription by token or user id.
    pub async fn get_subscription(&self, key: &SubscriptionKey) -> Result<SubscriptionDetails> {
        let response = self
            .client
            .get(self.url(SUBSCRIPTION_PATH))
            .query(&key_query(key))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Partially update a subscription's preferences.
    pub async fn update_subscription(
        &self,
        key: &SubscriptionKey,
        req: &UpdateSubscriptionRequest,
    ) -> Result<UpdateSubscriptionResponse> {
        let response = self
            .client
            .put(self.url(SUBSCRIPTION_PATH))
            .query(&key_query(key))
            .json(req)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Delete a subscription and its preferences.
    pub async fn delete_subscription(&self, key: &SubscriptionKey) -> Result<MessageResponse> {
        let response = self
            .client
            .delete(self.url(SUBSCRIPTION_PATH))
            .query(&key_query(key))
            .send()
            .await?;
        self.handle_response(response).await
    }
}
