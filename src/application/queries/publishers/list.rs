// src/application/queries/publishers/list.rs
use super::PublisherQueryService;
use crate::application::{dto::PublisherDto, error::ApplicationResult};

impl PublisherQueryService {
    /// Active publishers with their subscriber counts, for the browse and
    /// subscribe screens.
    pub async fn list_publishers(&self) -> ApplicationResult<Vec<PublisherDto>> {
        let publishers = self.publisher_repo.list_active().await?;

        let mut entries = Vec::with_capacity(publishers.len());
        for publisher in publishers {
            let subscriber_count = self
                .subscription_repo
                .publisher_subscriber_count(publisher.id)
                .await?;
            entries.push(PublisherDto::from_parts(publisher, subscriber_count));
        }

        Ok(entries)
    }
}
