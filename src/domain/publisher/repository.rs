// src/domain/publisher/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::publisher::entity::{AffiliationKind, NewPublisher, Publisher};
use crate::domain::publisher::value_objects::PublisherId;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait PublisherRepository: Send + Sync {
    async fn insert(&self, publisher: NewPublisher) -> DomainResult<Publisher>;

    async fn find_by_id(&self, id: PublisherId) -> DomainResult<Option<Publisher>>;

    async fn list_active(&self) -> DomainResult<Vec<Publisher>>;

    /// Idempotent; a second attach of the same pair is a no-op.
    async fn add_affiliation(
        &self,
        publisher_id: PublisherId,
        user_id: UserId,
        kind: AffiliationKind,
    ) -> DomainResult<()>;

    /// Publishers where the user sits on the editorial desk.
    async fn managed_publisher_ids(&self, user_id: UserId) -> DomainResult<Vec<PublisherId>>;

    /// Publishers the user writes for.
    async fn affiliated_publisher_ids(&self, user_id: UserId) -> DomainResult<Vec<PublisherId>>;
}
