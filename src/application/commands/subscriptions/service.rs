// src/application/commands/subscriptions/service.rs
use std::sync::Arc;

use crate::domain::{
    publisher::PublisherRepository, subscription::SubscriptionRepository, user::UserRepository,
};

pub struct SubscriptionCommandService {
    pub(super) subscription_repo: Arc<dyn SubscriptionRepository>,
    pub(super) publisher_repo: Arc<dyn PublisherRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
}

impl SubscriptionCommandService {
    pub fn new(
        subscription_repo: Arc<dyn SubscriptionRepository>,
        publisher_repo: Arc<dyn PublisherRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            subscription_repo,
            publisher_repo,
            user_repo,
        }
    }
}
