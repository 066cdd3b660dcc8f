// tests/support/mocks.rs
use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;

use newsroom_core::application::ports::notify::{
    Mailer, NotificationFailure, OutboundEmail, SocialBroadcaster,
};
use newsroom_core::application::ports::time::Clock;
use newsroom_core::application::ports::util::SlugGenerator;
use newsroom_core::domain::article::{
    Article, ArticleId, ArticleListCursor, ArticleReadRepository, ArticleSlug, ArticleStatus,
    ArticleUpdate, ArticleVisibility, ArticleWriteRepository, NewArticle, QueueScope,
    TrendingWindow,
};
use newsroom_core::domain::engagement::{
    Comment, CommentId, EngagementRepository, NewComment,
};
use newsroom_core::domain::errors::{DomainError, DomainResult};
use newsroom_core::domain::newsletter::{NewNewsletter, Newsletter, NewsletterId, NewsletterRepository};
use newsroom_core::domain::publisher::{
    AffiliationKind, NewPublisher, Publisher, PublisherId, PublisherRepository,
};
use newsroom_core::domain::subscription::{SubscriptionRepository, Subscriptions};
use newsroom_core::domain::user::{NewUser, Role, User, UserId, UserRepository, Username};

/// User store backed by a map, with the token column modelled as a
/// side table so the production token resolver works against it.
#[derive(Default)]
pub struct InMemoryUsers {
    users: Mutex<HashMap<i64, User>>,
    tokens: Mutex<HashMap<String, i64>>,
}

impl InMemoryUsers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a prebuilt user and its bearer token.
    pub fn seed(&self, user: User, token: &str) {
        let id = i64::from(user.id);
        self.users.lock().unwrap().insert(id, user);
        self.tokens.lock().unwrap().insert(token.to_owned(), id);
    }

    pub fn username_of(&self, id: i64) -> Option<String> {
        self.users
            .lock()
            .unwrap()
            .get(&id)
            .map(|user| user.username.to_string())
    }

    pub fn get(&self, id: i64) -> Option<User> {
        self.users.lock().unwrap().get(&id).cloned()
    }

    fn next_id(&self) -> i64 {
        self.users.lock().unwrap().keys().max().copied().unwrap_or(0) + 1
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn count(&self) -> DomainResult<u64> {
        Ok(self.users.lock().unwrap().len() as u64)
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let taken = self
            .users
            .lock()
            .unwrap()
            .values()
            .any(|user| user.username.as_str() == new_user.username.as_str());
        if taken {
            return Err(DomainError::Conflict("username already exists".into()));
        }

        let id = self.next_id();
        let user = User {
            id: UserId::new(id)?,
            username: new_user.username,
            email: new_user.email,
            role: new_user.role,
            is_active: new_user.is_active,
            created_at: new_user.created_at,
        };
        self.users.lock().unwrap().insert(id, user.clone());
        self.tokens.lock().unwrap().insert(new_user.api_token, id);
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> DomainResult<Vec<User>> {
        let users = self.users.lock().unwrap();
        Ok(ids
            .iter()
            .filter_map(|id| users.get(&i64::from(*id)).cloned())
            .collect())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|user| user.username.as_str() == username.as_str())
            .cloned())
    }

    async fn find_by_api_token(&self, token: &str) -> DomainResult<Option<User>> {
        let id = self.tokens.lock().unwrap().get(token).copied();
        Ok(id.and_then(|id| self.users.lock().unwrap().get(&id).cloned()))
    }

    async fn list_by_role(&self, role: Role) -> DomainResult<Vec<User>> {
        let mut users: Vec<User> = self
            .users
            .lock()
            .unwrap()
            .values()
            .filter(|user| user.role == role)
            .cloned()
            .collect();
        users.sort_by_key(|user| i64::from(user.id));
        Ok(users)
    }

    async fn set_role(&self, id: UserId, role: Role) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        user.role = role;
        Ok(user.clone())
    }
}

/// Article store implementing both halves of the repository pair over
/// the same map, mirroring how the Postgres tables behave: unique slug,
/// optimistic-concurrency guard on update, keyset listing order.
#[derive(Default)]
pub struct InMemoryArticles {
    articles: Mutex<HashMap<i64, Article>>,
    trending_scores: Mutex<HashMap<i64, i64>>,
}

impl InMemoryArticles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, article: Article) {
        self.articles
            .lock()
            .unwrap()
            .insert(i64::from(article.id), article);
    }

    pub fn get(&self, id: i64) -> Option<Article> {
        self.articles.lock().unwrap().get(&id).cloned()
    }

    pub fn set_trending_score(&self, id: i64, score: i64) {
        self.trending_scores.lock().unwrap().insert(id, score);
    }

    fn next_id(&self) -> i64 {
        self.articles
            .lock()
            .unwrap()
            .keys()
            .max()
            .copied()
            .unwrap_or(0)
            + 1
    }

    fn sort_key(article: &Article) -> (bool, DateTime<Utc>, i64) {
        (article.is_sticky, article.created_at, article.id.into())
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticles {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();
        if articles
            .values()
            .any(|existing| existing.slug.as_str() == article.slug.as_str())
        {
            return Err(DomainError::Conflict("slug already exists".into()));
        }

        let id = articles.keys().max().copied().unwrap_or(0) + 1;
        let stored = Article {
            id: ArticleId::new(id)?,
            title: article.title,
            slug: article.slug,
            content: article.content,
            excerpt: article.excerpt,
            reading_time: article.reading_time,
            status: article.status,
            is_sticky: article.is_sticky,
            view_count: 0,
            author_ids: article.author_ids,
            publisher_id: article.publisher_id,
            approved_by: None,
            published_at: None,
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        articles.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();
        let article = articles
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        if article.updated_at != update.original_updated_at {
            return Err(DomainError::Conflict(
                "article was modified concurrently".into(),
            ));
        }

        if let Some(title) = update.title {
            article.title = title;
        }
        if let Some(content) = update.content {
            article.content = content;
        }
        if let Some(excerpt) = update.excerpt {
            article.excerpt = excerpt;
        }
        if let Some(reading_time) = update.reading_time {
            article.reading_time = reading_time;
        }
        if let Some(status) = update.status {
            article.status = status;
        }
        if let Some(is_sticky) = update.is_sticky {
            article.is_sticky = is_sticky;
        }
        if let Some(publisher_id) = update.publisher_id {
            article.publisher_id = publisher_id;
        }
        if let Some(approved_by) = update.approved_by {
            article.approved_by = Some(approved_by);
        }
        if let Some(published_at) = update.published_at {
            article.published_at = Some(published_at);
        }
        article.updated_at = update.updated_at;
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.articles
            .lock()
            .unwrap()
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }

    async fn record_view(&self, id: ArticleId) -> DomainResult<()> {
        let mut articles = self.articles.lock().unwrap();
        let article = articles
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        article.view_count += 1;
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticles {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.articles.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        Ok(self
            .articles
            .lock()
            .unwrap()
            .values()
            .find(|article| article.slug.as_str() == slug.as_str())
            .cloned())
    }

    async fn list_page(
        &self,
        visibility: &ArticleVisibility,
        limit: u32,
        cursor: Option<ArticleListCursor>,
        search: Option<&str>,
    ) -> DomainResult<(Vec<Article>, Option<ArticleListCursor>)> {
        let term = search.map(str::to_lowercase);
        let mut rows: Vec<Article> = self
            .articles
            .lock()
            .unwrap()
            .values()
            .filter(|article| visibility.allows(article))
            .filter(|article| match &term {
                Some(term) => {
                    article.title.as_str().to_lowercase().contains(term)
                        || article.content.as_str().to_lowercase().contains(term)
                }
                None => true,
            })
            .cloned()
            .collect();
        rows.sort_by(|a, b| Self::sort_key(b).cmp(&Self::sort_key(a)));

        if let Some(cursor) = cursor {
            let boundary = (cursor.is_sticky, cursor.created_at, cursor.id);
            rows.retain(|article| Self::sort_key(article) < boundary);
        }

        let has_more = rows.len() > limit as usize;
        rows.truncate(limit as usize);
        let next = if has_more {
            rows.last().map(|last| {
                ArticleListCursor::new(last.is_sticky, last.created_at, last.id.into())
            })
        } else {
            None
        };
        Ok((rows, next))
    }

    async fn list_trending(
        &self,
        visibility: &ArticleVisibility,
        limit: u32,
        window: TrendingWindow,
    ) -> DomainResult<Vec<Article>> {
        let horizon = Utc::now() - Duration::days(window.window_days);
        let scores = self.trending_scores.lock().unwrap();
        let mut rows: Vec<Article> = self
            .articles
            .lock()
            .unwrap()
            .values()
            .filter(|article| article.status.is_published() && visibility.allows(article))
            .filter(|article| article.published_at.is_some_and(|at| at >= horizon))
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            let score_a = scores.get(&i64::from(a.id)).copied().unwrap_or(0);
            let score_b = scores.get(&i64::from(b.id)).copied().unwrap_or(0);
            score_b
                .cmp(&score_a)
                .then(i64::from(b.id).cmp(&i64::from(a.id)))
        });
        rows.truncate(limit as usize);
        Ok(rows)
    }

    async fn list_queue(&self, scope: &QueueScope) -> DomainResult<Vec<Article>> {
        let mut rows: Vec<Article> = self
            .articles
            .lock()
            .unwrap()
            .values()
            .filter(|article| article.status == ArticleStatus::Submitted)
            .filter(|article| match scope {
                QueueScope::All => true,
                QueueScope::Managed(publishers) => article.belongs_to_any(publishers),
            })
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn list_published_by_publisher(
        &self,
        publisher_id: PublisherId,
    ) -> DomainResult<Vec<Article>> {
        let mut rows: Vec<Article> = self
            .articles
            .lock()
            .unwrap()
            .values()
            .filter(|article| {
                article.status.is_published() && article.publisher_id == Some(publisher_id)
            })
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Ok(rows)
    }

    async fn list_published_by_author(&self, author_id: UserId) -> DomainResult<Vec<Article>> {
        let mut rows: Vec<Article> = self
            .articles
            .lock()
            .unwrap()
            .values()
            .filter(|article| article.status.is_published() && article.is_authored_by(author_id))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Ok(rows)
    }

    async fn count_published_by_author(&self, author_id: UserId) -> DomainResult<u64> {
        Ok(self
            .articles
            .lock()
            .unwrap()
            .values()
            .filter(|article| article.status.is_published() && article.is_authored_by(author_id))
            .count() as u64)
    }
}

#[derive(Default)]
pub struct InMemoryPublishers {
    publishers: Mutex<HashMap<i64, Publisher>>,
    affiliations: Mutex<BTreeSet<(i64, i64, &'static str)>>,
}

impl InMemoryPublishers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, publisher: Publisher) {
        self.publishers
            .lock()
            .unwrap()
            .insert(i64::from(publisher.id), publisher);
    }

    pub fn affiliation_count(&self) -> usize {
        self.affiliations.lock().unwrap().len()
    }
}

#[async_trait]
impl PublisherRepository for InMemoryPublishers {
    async fn insert(&self, publisher: NewPublisher) -> DomainResult<Publisher> {
        let mut publishers = self.publishers.lock().unwrap();
        let id = publishers.keys().max().copied().unwrap_or(0) + 1;
        let stored = Publisher {
            id: PublisherId::new(id)?,
            name: publisher.name,
            description: publisher.description,
            website: publisher.website,
            is_active: publisher.is_active,
            created_at: publisher.created_at,
        };
        publishers.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: PublisherId) -> DomainResult<Option<Publisher>> {
        Ok(self.publishers.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn list_active(&self) -> DomainResult<Vec<Publisher>> {
        let mut rows: Vec<Publisher> = self
            .publishers
            .lock()
            .unwrap()
            .values()
            .filter(|publisher| publisher.is_active)
            .cloned()
            .collect();
        rows.sort_by_key(|publisher| i64::from(publisher.id));
        Ok(rows)
    }

    async fn add_affiliation(
        &self,
        publisher_id: PublisherId,
        user_id: UserId,
        kind: AffiliationKind,
    ) -> DomainResult<()> {
        self.affiliations.lock().unwrap().insert((
            publisher_id.into(),
            user_id.into(),
            kind.as_str(),
        ));
        Ok(())
    }

    async fn managed_publisher_ids(&self, user_id: UserId) -> DomainResult<Vec<PublisherId>> {
        self.ids_for(user_id, AffiliationKind::Editor)
    }

    async fn affiliated_publisher_ids(&self, user_id: UserId) -> DomainResult<Vec<PublisherId>> {
        self.ids_for(user_id, AffiliationKind::Journalist)
    }
}

impl InMemoryPublishers {
    fn ids_for(&self, user_id: UserId, kind: AffiliationKind) -> DomainResult<Vec<PublisherId>> {
        let user_id = i64::from(user_id);
        self.affiliations
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, uid, k)| *uid == user_id && *k == kind.as_str())
            .map(|(pid, _, _)| PublisherId::new(*pid))
            .collect()
    }
}

#[derive(Default)]
pub struct InMemorySubscriptions {
    publisher_edges: Mutex<BTreeSet<(i64, i64)>>,
    journalist_edges: Mutex<BTreeSet<(i64, i64)>>,
}

impl InMemorySubscriptions {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubscriptionRepository for InMemorySubscriptions {
    async fn subscribe_publisher(
        &self,
        reader_id: UserId,
        publisher_id: PublisherId,
    ) -> DomainResult<bool> {
        Ok(self
            .publisher_edges
            .lock()
            .unwrap()
            .insert((reader_id.into(), publisher_id.into())))
    }

    async fn unsubscribe_publisher(
        &self,
        reader_id: UserId,
        publisher_id: PublisherId,
    ) -> DomainResult<bool> {
        Ok(self
            .publisher_edges
            .lock()
            .unwrap()
            .remove(&(reader_id.into(), publisher_id.into())))
    }

    async fn subscribe_journalist(
        &self,
        reader_id: UserId,
        journalist_id: UserId,
    ) -> DomainResult<bool> {
        Ok(self
            .journalist_edges
            .lock()
            .unwrap()
            .insert((reader_id.into(), journalist_id.into())))
    }

    async fn unsubscribe_journalist(
        &self,
        reader_id: UserId,
        journalist_id: UserId,
    ) -> DomainResult<bool> {
        Ok(self
            .journalist_edges
            .lock()
            .unwrap()
            .remove(&(reader_id.into(), journalist_id.into())))
    }

    async fn subscriptions_for(&self, reader_id: UserId) -> DomainResult<Subscriptions> {
        let reader = i64::from(reader_id);
        let publisher_ids = self
            .publisher_edges
            .lock()
            .unwrap()
            .iter()
            .filter(|(r, _)| *r == reader)
            .map(|(_, p)| PublisherId::new(*p))
            .collect::<DomainResult<Vec<_>>>()?;
        let journalist_ids = self
            .journalist_edges
            .lock()
            .unwrap()
            .iter()
            .filter(|(r, _)| *r == reader)
            .map(|(_, j)| UserId::new(*j))
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Subscriptions {
            publisher_ids,
            journalist_ids,
        })
    }

    async fn publisher_subscriber_ids(
        &self,
        publisher_id: PublisherId,
    ) -> DomainResult<Vec<UserId>> {
        let publisher = i64::from(publisher_id);
        self.publisher_edges
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, p)| *p == publisher)
            .map(|(r, _)| UserId::new(*r))
            .collect()
    }

    async fn journalist_follower_ids(&self, journalist_id: UserId) -> DomainResult<Vec<UserId>> {
        let journalist = i64::from(journalist_id);
        self.journalist_edges
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, j)| *j == journalist)
            .map(|(r, _)| UserId::new(*r))
            .collect()
    }

    async fn publisher_subscriber_count(&self, publisher_id: PublisherId) -> DomainResult<u64> {
        let publisher = i64::from(publisher_id);
        Ok(self
            .publisher_edges
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, p)| *p == publisher)
            .count() as u64)
    }

    async fn journalist_follower_count(&self, journalist_id: UserId) -> DomainResult<u64> {
        let journalist = i64::from(journalist_id);
        Ok(self
            .journalist_edges
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, j)| *j == journalist)
            .count() as u64)
    }
}

/// Comments, likes and reading history in one fake; author usernames are
/// resolved against the user store the way the SQL join would.
pub struct InMemoryEngagement {
    users: Arc<InMemoryUsers>,
    comments: Mutex<Vec<Comment>>,
    likes: Mutex<BTreeSet<(i64, i64)>>,
    readings: Mutex<HashMap<(i64, i64), DateTime<Utc>>>,
}

impl InMemoryEngagement {
    pub fn new(users: Arc<InMemoryUsers>) -> Self {
        Self {
            users,
            comments: Mutex::new(Vec::new()),
            likes: Mutex::new(BTreeSet::new()),
            readings: Mutex::new(HashMap::new()),
        }
    }

    pub fn reading_at(&self, user_id: i64, article_id: i64) -> Option<DateTime<Utc>> {
        self.readings
            .lock()
            .unwrap()
            .get(&(user_id, article_id))
            .copied()
    }
}

#[async_trait]
impl EngagementRepository for InMemoryEngagement {
    async fn insert_comment(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut comments = self.comments.lock().unwrap();
        let id = comments
            .iter()
            .map(|c| i64::from(c.id))
            .max()
            .unwrap_or(0)
            + 1;
        let author_username = self
            .users
            .username_of(comment.author_id.into())
            .unwrap_or_else(|| "unknown".into());
        let stored = Comment {
            id: CommentId::new(id)?,
            article_id: comment.article_id,
            author_id: comment.author_id,
            author_username,
            parent_id: comment.parent_id,
            content: comment.content,
            is_approved: comment.is_approved,
            created_at: comment.created_at,
        };
        comments.push(stored.clone());
        Ok(stored)
    }

    async fn find_comment(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        Ok(self
            .comments
            .lock()
            .unwrap()
            .iter()
            .find(|comment| comment.id == id)
            .cloned())
    }

    async fn list_comments(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        let mut rows: Vec<Comment> = self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|comment| comment.article_id == article_id && comment.is_approved)
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then(i64::from(a.id).cmp(&i64::from(b.id)))
        });
        Ok(rows)
    }

    async fn comment_count(&self, article_id: ArticleId) -> DomainResult<u64> {
        Ok(self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|comment| comment.article_id == article_id && comment.is_approved)
            .count() as u64)
    }

    async fn insert_like(&self, article_id: ArticleId, user_id: UserId) -> DomainResult<bool> {
        Ok(self
            .likes
            .lock()
            .unwrap()
            .insert((article_id.into(), user_id.into())))
    }

    async fn delete_like(&self, article_id: ArticleId, user_id: UserId) -> DomainResult<bool> {
        Ok(self
            .likes
            .lock()
            .unwrap()
            .remove(&(article_id.into(), user_id.into())))
    }

    async fn like_count(&self, article_id: ArticleId) -> DomainResult<u64> {
        let article = i64::from(article_id);
        Ok(self
            .likes
            .lock()
            .unwrap()
            .iter()
            .filter(|(a, _)| *a == article)
            .count() as u64)
    }

    async fn upsert_reading(
        &self,
        user_id: UserId,
        article_id: ArticleId,
        read_at: DateTime<Utc>,
    ) -> DomainResult<()> {
        self.readings
            .lock()
            .unwrap()
            .insert((user_id.into(), article_id.into()), read_at);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryNewsletters {
    newsletters: Mutex<Vec<Newsletter>>,
}

impl InMemoryNewsletters {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NewsletterRepository for InMemoryNewsletters {
    async fn insert(&self, newsletter: NewNewsletter) -> DomainResult<Newsletter> {
        let mut newsletters = self.newsletters.lock().unwrap();
        let id = newsletters
            .iter()
            .map(|n| i64::from(n.id))
            .max()
            .unwrap_or(0)
            + 1;
        let stored = Newsletter {
            id: NewsletterId::new(id)?,
            title: newsletter.title,
            content: newsletter.content,
            frequency: newsletter.frequency,
            publisher_id: newsletter.publisher_id,
            created_by: newsletter.created_by,
            featured_article_ids: newsletter.featured_article_ids,
            scheduled_for: newsletter.scheduled_for,
            sent_at: None,
            created_at: newsletter.created_at,
        };
        newsletters.push(stored.clone());
        Ok(stored)
    }

    async fn list_by_publisher(&self, publisher_id: PublisherId) -> DomainResult<Vec<Newsletter>> {
        let mut rows: Vec<Newsletter> = self
            .newsletters
            .lock()
            .unwrap()
            .iter()
            .filter(|newsletter| newsletter.publisher_id == Some(publisher_id))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn list_by_creator(&self, creator_id: UserId) -> DomainResult<Vec<Newsletter>> {
        let mut rows: Vec<Newsletter> = self
            .newsletters
            .lock()
            .unwrap()
            .iter()
            .filter(|newsletter| newsletter.created_by == creator_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }
}

/// Mailer that records every send; addresses in `fail_for` error instead.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutboundEmail>>,
    fail_for: Mutex<BTreeSet<String>>,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_for(&self, address: &str) {
        self.fail_for.lock().unwrap().insert(address.to_owned());
    }

    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_to(&self) -> Vec<String> {
        let mut addresses: Vec<String> = self
            .sent
            .lock()
            .unwrap()
            .iter()
            .map(|email| email.to.clone())
            .collect();
        addresses.sort();
        addresses
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: OutboundEmail) -> Result<(), NotificationFailure> {
        if self.fail_for.lock().unwrap().contains(&email.to) {
            return Err(NotificationFailure(format!("mailbox {} unavailable", email.to)));
        }
        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingSocial {
    posts: Mutex<Vec<String>>,
    fail: AtomicBool,
}

impl RecordingSocial {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_next(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    pub fn posts(&self) -> Vec<String> {
        self.posts.lock().unwrap().clone()
    }
}

#[async_trait]
impl SocialBroadcaster for RecordingSocial {
    async fn post_update(&self, text: &str) -> Result<(), NotificationFailure> {
        if self.fail.swap(false, Ordering::SeqCst) {
            return Err(NotificationFailure("social API rejected the post".into()));
        }
        self.posts.lock().unwrap().push(text.to_owned());
        Ok(())
    }
}

/// Shared frozen timestamp for the default test clock.
static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2026-01-05T09:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks.rs")
        .with_timezone(&Utc)
});

/// Clock frozen at a fixed instant so stamped values are assertable.
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self(*FIXED_NOW)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub struct DummySlug;

impl SlugGenerator for DummySlug {
    fn slugify(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut last_dash = true;
        for ch in input.chars() {
            if ch.is_ascii_alphanumeric() {
                out.extend(ch.to_lowercase());
                last_dash = false;
            } else if !last_dash {
                out.push('-');
                last_dash = true;
            }
        }
        out.trim_end_matches('-').to_owned()
    }
}
