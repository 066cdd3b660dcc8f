// src/domain/subscription/entity.rs
use crate::domain::publisher::PublisherId;
use crate::domain::user::UserId;

/// What a reader can point a subscription at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionTarget {
    Publisher(PublisherId),
    Journalist(UserId),
}

/// A reader's current subscription edges.
#[derive(Debug, Clone, Default)]
pub struct Subscriptions {
    pub publisher_ids: Vec<PublisherId>,
    pub journalist_ids: Vec<UserId>,
}

impl Subscriptions {
    pub fn is_empty(&self) -> bool {
        self.publisher_ids.is_empty() && self.journalist_ids.is_empty()
    }
}
