// src/application/queries/publishers/service.rs
use std::sync::Arc;

use crate::domain::{publisher::PublisherRepository, subscription::SubscriptionRepository};

pub struct PublisherQueryService {
    pub(super) publisher_repo: Arc<dyn PublisherRepository>,
    pub(super) subscription_repo: Arc<dyn SubscriptionRepository>,
}

impl PublisherQueryService {
    pub fn new(
        publisher_repo: Arc<dyn PublisherRepository>,
        subscription_repo: Arc<dyn SubscriptionRepository>,
    ) -> Self {
        Self {
            publisher_repo,
            subscription_repo,
        }
    }
}
