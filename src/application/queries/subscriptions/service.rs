// src/application/queries/subscriptions/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, SubscriptionsDto},
        error::ApplicationResult,
    },
    domain::subscription::SubscriptionRepository,
};

pub struct SubscriptionQueryService {
    subscription_repo: Arc<dyn SubscriptionRepository>,
}

impl SubscriptionQueryService {
    pub fn new(subscription_repo: Arc<dyn SubscriptionRepository>) -> Self {
        Self { subscription_repo }
    }

    pub async fn my_subscriptions(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<SubscriptionsDto> {
        let subscriptions = self.subscription_repo.subscriptions_for(actor.id).await?;
        Ok(subscriptions.into())
    }
}
