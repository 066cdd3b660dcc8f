// src/domain/article/specifications.rs
use std::collections::HashSet;

use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::ArticleStatus;
use crate::domain::publisher::PublisherId;
use crate::domain::user::value_objects::{Capability, UserId};

/// Journalists may edit their own drafts, editors anything on their
/// desks, admins anything.
pub struct CanUpdateArticleSpec<'a> {
    capabilities: &'a HashSet<Capability>,
    article: &'a Article,
    user_id: UserId,
    managed_publishers: &'a [PublisherId],
}

impl<'a> CanUpdateArticleSpec<'a> {
    pub fn new(
        capabilities: &'a HashSet<Capability>,
        article: &'a Article,
        user_id: UserId,
        managed_publishers: &'a [PublisherId],
    ) -> Self {
        Self {
            capabilities,
            article,
            user_id,
            managed_publishers,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.has_capability("articles", "update:any")
            || (self.has_capability("articles", "update:own")
                && self.article.is_authored_by(self.user_id)
                && self.article.status == ArticleStatus::Draft)
            || (self.has_capability("articles", "update:managed")
                && self.article.belongs_to_any(self.managed_publishers))
    }

    fn has_capability(&self, resource: &str, action: &str) -> bool {
        self.capabilities
            .iter()
            .any(|cap| cap.matches(resource, action))
    }
}

pub struct CanDeleteArticleSpec<'a> {
    capabilities: &'a HashSet<Capability>,
    article: &'a Article,
    user_id: UserId,
    managed_publishers: &'a [PublisherId],
}

impl<'a> CanDeleteArticleSpec<'a> {
    pub fn new(
        capabilities: &'a HashSet<Capability>,
        article: &'a Article,
        user_id: UserId,
        managed_publishers: &'a [PublisherId],
    ) -> Self {
        Self {
            capabilities,
            article,
            user_id,
            managed_publishers,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.has_capability("articles", "delete:any")
            || (self.has_capability("articles", "delete:own")
                && self.article.is_authored_by(self.user_id))
            || (self.has_capability("articles", "delete:managed")
                && self.article.belongs_to_any(self.managed_publishers))
    }

    fn has_capability(&self, resource: &str, action: &str) -> bool {
        self.capabilities
            .iter()
            .any(|cap| cap.matches(resource, action))
    }
}
