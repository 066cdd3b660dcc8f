// src/application/queries/users/service.rs
use std::sync::Arc;

use crate::domain::{
    article::ArticleReadRepository, subscription::SubscriptionRepository, user::UserRepository,
};

pub struct UserQueryService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) article_read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) subscription_repo: Arc<dyn SubscriptionRepository>,
}

impl UserQueryService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        subscription_repo: Arc<dyn SubscriptionRepository>,
    ) -> Self {
        Self {
            user_repo,
            article_read_repo,
            subscription_repo,
        }
    }
}
