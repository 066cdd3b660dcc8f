// src/domain/article/visibility.rs
use crate::domain::article::entity::Article;
use crate::domain::publisher::PublisherId;
use crate::domain::user::UserId;

/// Which articles a listing may show. Built once per request from the
/// actor's role and their subscription / desk edges, then handed to the
/// read repository; `allows` is the same rule applied to a single row.
#[derive(Debug, Clone)]
pub enum ArticleVisibility {
    /// Anonymous callers and readers without subscriptions.
    PublishedOnly,
    /// Readers with at least one subscription: published articles from
    /// subscribed publishers or followed journalists (union).
    SubscriptionFeed {
        publishers: Vec<PublisherId>,
        journalists: Vec<UserId>,
    },
    /// Journalists: everything they authored plus everything published.
    AuthoredOrPublished { author: UserId },
    /// Editors: every article of their desks plus everything published.
    ManagedOrPublished { publishers: Vec<PublisherId> },
    /// Admins.
    Unrestricted,
}

impl ArticleVisibility {
    pub fn for_reader(publishers: Vec<PublisherId>, journalists: Vec<UserId>) -> Self {
        if publishers.is_empty() && journalists.is_empty() {
            ArticleVisibility::PublishedOnly
        } else {
            ArticleVisibility::SubscriptionFeed {
                publishers,
                journalists,
            }
        }
    }

    pub fn allows(&self, article: &Article) -> bool {
        match self {
            ArticleVisibility::PublishedOnly => article.status.is_published(),
            ArticleVisibility::SubscriptionFeed {
                publishers,
                journalists,
            } => {
                article.status.is_published()
                    && (article.belongs_to_any(publishers)
                        || journalists.iter().any(|id| article.is_authored_by(*id)))
            }
            ArticleVisibility::AuthoredOrPublished { author } => {
                article.status.is_published() || article.is_authored_by(*author)
            }
            ArticleVisibility::ManagedOrPublished { publishers } => {
                article.status.is_published() || article.belongs_to_any(publishers)
            }
            ArticleVisibility::Unrestricted => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::value_objects::{
        ArticleContent, ArticleId, ArticleSlug, ArticleStatus, ArticleTitle,
    };
    use chrono::Utc;

    fn article(status: ArticleStatus, author: i64, publisher: Option<i64>) -> Article {
        Article {
            id: ArticleId::new(1).unwrap(),
            title: ArticleTitle::new("Visibility sample").unwrap(),
            slug: ArticleSlug::new("visibility-sample").unwrap(),
            content: ArticleContent::new("v".repeat(120)).unwrap(),
            excerpt: String::new(),
            reading_time: 1,
            status,
            is_sticky: false,
            view_count: 0,
            author_ids: vec![UserId::new(author).unwrap()],
            publisher_id: publisher.map(|id| PublisherId::new(id).unwrap()),
            approved_by: None,
            published_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn reader_without_subscriptions_sees_all_published() {
        let visibility = ArticleVisibility::for_reader(vec![], vec![]);
        assert!(matches!(visibility, ArticleVisibility::PublishedOnly));
        assert!(visibility.allows(&article(ArticleStatus::Published, 1, None)));
        assert!(!visibility.allows(&article(ArticleStatus::Draft, 1, None)));
    }

    #[test]
    fn subscribed_reader_matches_publisher_or_journalist() {
        let visibility = ArticleVisibility::for_reader(
            vec![PublisherId::new(5).unwrap()],
            vec![UserId::new(9).unwrap()],
        );
        assert!(visibility.allows(&article(ArticleStatus::Published, 1, Some(5))));
        assert!(visibility.allows(&article(ArticleStatus::Published, 9, None)));
        assert!(!visibility.allows(&article(ArticleStatus::Published, 1, Some(6))));
        assert!(!visibility.allows(&article(ArticleStatus::Submitted, 9, Some(5))));
    }

    #[test]
    fn journalist_sees_own_drafts_and_everything_published() {
        let visibility = ArticleVisibility::AuthoredOrPublished {
            author: UserId::new(3).unwrap(),
        };
        assert!(visibility.allows(&article(ArticleStatus::Draft, 3, None)));
        assert!(visibility.allows(&article(ArticleStatus::Published, 8, None)));
        assert!(!visibility.allows(&article(ArticleStatus::Draft, 8, None)));
    }

    #[test]
    fn editor_sees_desk_articles_in_any_status() {
        let visibility = ArticleVisibility::ManagedOrPublished {
            publishers: vec![PublisherId::new(2).unwrap()],
        };
        assert!(visibility.allows(&article(ArticleStatus::Submitted, 1, Some(2))));
        assert!(visibility.allows(&article(ArticleStatus::Published, 1, Some(7))));
        assert!(!visibility.allows(&article(ArticleStatus::Submitted, 1, Some(7))));
        assert!(!visibility.allows(&article(ArticleStatus::Submitted, 1, None)));
    }

    #[test]
    fn admin_sees_everything() {
        let visibility = ArticleVisibility::Unrestricted;
        assert!(visibility.allows(&article(ArticleStatus::Rejected, 1, None)));
    }
}
