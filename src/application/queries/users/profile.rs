// src/application/queries/users/profile.rs
use super::UserQueryService;
use crate::application::{
    dto::{AuthenticatedUser, UserProfileDto},
    error::{ApplicationError, ApplicationResult},
};

impl UserQueryService {
    pub async fn get_profile(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<UserProfileDto> {
        let user = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        let article_count = self
            .article_read_repo
            .count_published_by_author(actor.id)
            .await?;
        let follower_count = self
            .subscription_repo
            .journalist_follower_count(actor.id)
            .await?;

        Ok(UserProfileDto::from_parts(
            user,
            actor,
            article_count,
            follower_count,
        ))
    }
}
