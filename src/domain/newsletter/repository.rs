// src/domain/newsletter/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::newsletter::entity::{NewNewsletter, Newsletter};
use crate::domain::publisher::PublisherId;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait NewsletterRepository: Send + Sync {
    async fn insert(&self, newsletter: NewNewsletter) -> DomainResult<Newsletter>;

    async fn list_by_publisher(&self, publisher_id: PublisherId) -> DomainResult<Vec<Newsletter>>;

    async fn list_by_creator(&self, creator_id: UserId) -> DomainResult<Vec<Newsletter>>;
}
