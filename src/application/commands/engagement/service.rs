// src/application/commands/engagement/service.rs
use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    engagement::EngagementRepository,
};

pub struct EngagementCommandService {
    pub(super) engagement_repo: Arc<dyn EngagementRepository>,
    pub(super) article_read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) article_write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl EngagementCommandService {
    pub fn new(
        engagement_repo: Arc<dyn EngagementRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            engagement_repo,
            article_read_repo,
            article_write_repo,
            clock,
        }
    }
}
