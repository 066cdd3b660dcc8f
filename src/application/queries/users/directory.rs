// src/application/queries/users/directory.rs
use super::UserQueryService;
use crate::{
    application::{dto::JournalistDto, error::ApplicationResult},
    domain::user::Role,
};

impl UserQueryService {
    /// Public roster of journalists with the counts the follow UI shows.
    pub async fn list_journalists(&self) -> ApplicationResult<Vec<JournalistDto>> {
        let journalists = self.user_repo.list_by_role(Role::Journalist).await?;

        let mut entries = Vec::with_capacity(journalists.len());
        for user in journalists {
            if !user.is_active {
                continue;
            }
            let article_count = self
                .article_read_repo
                .count_published_by_author(user.id)
                .await?;
            let follower_count = self
                .subscription_repo
                .journalist_follower_count(user.id)
                .await?;
            entries.push(JournalistDto::from_parts(user, article_count, follower_count));
        }

        Ok(entries)
    }
}
