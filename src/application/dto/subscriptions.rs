// src/application/dto/subscriptions.rs
use crate::domain::subscription::Subscriptions;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubscriptionsDto {
    pub publisher_ids: Vec<i64>,
    pub journalist_ids: Vec<i64>,
}

impl From<Subscriptions> for SubscriptionsDto {
    fn from(subscriptions: Subscriptions) -> Self {
        Self {
            publisher_ids: subscriptions
                .publisher_ids
                .into_iter()
                .map(Into::into)
                .collect(),
            journalist_ids: subscriptions
                .journalist_ids
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

/// Outcome of a subscribe/unsubscribe call; `changed` is false when the
/// request was already satisfied.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubscriptionChangeDto {
    pub changed: bool,
    pub subscriptions: SubscriptionsDto,
}
