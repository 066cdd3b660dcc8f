// src/application/commands/newsletters/service.rs
use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::domain::{
    article::ArticleReadRepository, newsletter::NewsletterRepository,
    publisher::PublisherRepository,
};

pub struct NewsletterCommandService {
    pub(super) newsletter_repo: Arc<dyn NewsletterRepository>,
    pub(super) publisher_repo: Arc<dyn PublisherRepository>,
    pub(super) article_read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl NewsletterCommandService {
    pub fn new(
        newsletter_repo: Arc<dyn NewsletterRepository>,
        publisher_repo: Arc<dyn PublisherRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            newsletter_repo,
            publisher_repo,
            article_read_repo,
            clock,
        }
    }
}
