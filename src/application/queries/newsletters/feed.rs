// src/application/queries/newsletters/feed.rs
use super::NewsletterQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, NewsletterDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{publisher::PublisherId, user::UserId},
};

/// Exactly one of the two targets must be set.
pub struct NewsletterFeedQuery {
    pub publisher_id: Option<i64>,
    pub journalist_id: Option<i64>,
}

impl NewsletterQueryService {
    pub async fn newsletter_feed(
        &self,
        _actor: &AuthenticatedUser,
        query: NewsletterFeedQuery,
    ) -> ApplicationResult<Vec<NewsletterDto>> {
        let records = match (query.publisher_id, query.journalist_id) {
            (Some(publisher_id), None) => {
                let id = PublisherId::new(publisher_id)?;
                self.publisher_repo
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| ApplicationError::not_found("publisher not found"))?;
                self.newsletter_repo.list_by_publisher(id).await?
            }
            (None, Some(journalist_id)) => {
                let id = UserId::new(journalist_id)?;
                let user = self
                    .user_repo
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| ApplicationError::not_found("journalist not found"))?;
                if !user.is_journalist() {
                    return Err(ApplicationError::invalid_target(
                        "feeds may only target journalists",
                    ));
                }
                self.newsletter_repo.list_by_creator(id).await?
            }
            _ => {
                return Err(ApplicationError::missing_parameter(
                    "provide exactly one of publisher_id or journalist_id",
                ));
            }
        };

        Ok(records.into_iter().map(Into::into).collect())
    }
}
