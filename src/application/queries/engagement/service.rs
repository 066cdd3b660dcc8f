// src/application/queries/engagement/service.rs
use std::sync::Arc;

use crate::domain::{article::ArticleReadRepository, engagement::EngagementRepository};

pub struct EngagementQueryService {
    pub(super) engagement_repo: Arc<dyn EngagementRepository>,
    pub(super) article_read_repo: Arc<dyn ArticleReadRepository>,
}

impl EngagementQueryService {
    pub fn new(
        engagement_repo: Arc<dyn EngagementRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
    ) -> Self {
        Self {
            engagement_repo,
            article_read_repo,
        }
    }
}
