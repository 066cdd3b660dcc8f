// src/application/queries/newsletters/service.rs
use std::sync::Arc;

use crate::domain::{
    newsletter::NewsletterRepository, publisher::PublisherRepository, user::UserRepository,
};

pub struct NewsletterQueryService {
    pub(super) newsletter_repo: Arc<dyn NewsletterRepository>,
    pub(super) publisher_repo: Arc<dyn PublisherRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
}

impl NewsletterQueryService {
    pub fn new(
        newsletter_repo: Arc<dyn NewsletterRepository>,
        publisher_repo: Arc<dyn PublisherRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            newsletter_repo,
            publisher_repo,
            user_repo,
        }
    }
}
