// src/application/queries/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationResult},
    domain::{
        article::{ArticleReadRepository, ArticleVisibility, TrendingWindow},
        publisher::PublisherRepository,
        subscription::SubscriptionRepository,
        user::{Role, UserRepository},
    },
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) subscription_repo: Arc<dyn SubscriptionRepository>,
    pub(super) publisher_repo: Arc<dyn PublisherRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) trending: TrendingWindow,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        subscription_repo: Arc<dyn SubscriptionRepository>,
        publisher_repo: Arc<dyn PublisherRepository>,
        user_repo: Arc<dyn UserRepository>,
        trending: TrendingWindow,
    ) -> Self {
        Self {
            read_repo,
            subscription_repo,
            publisher_repo,
            user_repo,
            trending,
        }
    }

    /// One visibility value per request, derived from the actor's role and
    /// their stored edges. Anonymous callers see published articles only.
    pub(super) async fn resolve_visibility(
        &self,
        actor: Option<&AuthenticatedUser>,
    ) -> ApplicationResult<ArticleVisibility> {
        let Some(actor) = actor else {
            return Ok(ArticleVisibility::PublishedOnly);
        };

        let visibility = match actor.role {
            Role::Admin => ArticleVisibility::Unrestricted,
            Role::Editor => ArticleVisibility::ManagedOrPublished {
                publishers: self.publisher_repo.managed_publisher_ids(actor.id).await?,
            },
            Role::Journalist => ArticleVisibility::AuthoredOrPublished { author: actor.id },
            Role::Reader => {
                let subscriptions = self.subscription_repo.subscriptions_for(actor.id).await?;
                ArticleVisibility::for_reader(
                    subscriptions.publisher_ids,
                    subscriptions.journalist_ids,
                )
            }
        };
        Ok(visibility)
    }
}
