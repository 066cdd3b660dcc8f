// src/domain/subscription/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::publisher::PublisherId;
use crate::domain::subscription::entity::Subscriptions;
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Subscription edges are unique pairs; adding an existing edge and
/// removing a missing one are both no-ops. The `bool` reports whether
/// the call changed anything.
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    async fn subscribe_publisher(
        &self,
        reader_id: UserId,
        publisher_id: PublisherId,
    ) -> DomainResult<bool>;

    async fn unsubscribe_publisher(
        &self,
        reader_id: UserId,
        publisher_id: PublisherId,
    ) -> DomainResult<bool>;

    async fn subscribe_journalist(
        &self,
        reader_id: UserId,
        journalist_id: UserId,
    ) -> DomainResult<bool>;

    async fn unsubscribe_journalist(
        &self,
        reader_id: UserId,
        journalist_id: UserId,
    ) -> DomainResult<bool>;

    async fn subscriptions_for(&self, reader_id: UserId) -> DomainResult<Subscriptions>;

    async fn publisher_subscriber_ids(
        &self,
        publisher_id: PublisherId,
    ) -> DomainResult<Vec<UserId>>;

    async fn journalist_follower_ids(&self, journalist_id: UserId) -> DomainResult<Vec<UserId>>;

    async fn publisher_subscriber_count(&self, publisher_id: PublisherId) -> DomainResult<u64>;

    async fn journalist_follower_count(&self, journalist_id: UserId) -> DomainResult<u64>;
}
