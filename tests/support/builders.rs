// tests/support/builders.rs
use chrono::{DateTime, Utc};

use newsroom_core::application::dto::AuthenticatedUser;
use newsroom_core::domain::article::{
    Article, ArticleContent, ArticleId, ArticleSlug, ArticleStatus, ArticleTitle,
};
use newsroom_core::domain::publisher::{
    Publisher, PublisherDescription, PublisherId, PublisherName,
};
use newsroom_core::domain::user::{EmailAddress, Role, User, UserId, Username};

pub const DEFAULT_CONTENT: &str = "City council approved the riverside development plan late on \
Tuesday after a four hour session, clearing the way for construction to begin next spring \
despite objections from two neighbourhood groups.";

pub struct UserBuilder {
    id: i64,
    username: String,
    email: Option<String>,
    role: Role,
    is_active: bool,
}

impl UserBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            username: "casey".into(),
            email: None,
            role: Role::Reader,
            is_active: true,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    pub fn build(self) -> User {
        User {
            id: UserId::new(self.id).unwrap(),
            username: Username::new(self.username).unwrap(),
            email: self.email.map(|email| EmailAddress::new(email).unwrap()),
            role: self.role,
            is_active: self.is_active,
            created_at: Utc::now(),
        }
    }
}

pub struct ArticleBuilder {
    id: i64,
    title: String,
    slug: Option<String>,
    content: String,
    status: ArticleStatus,
    is_sticky: bool,
    author_ids: Vec<i64>,
    publisher_id: Option<i64>,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            title: "Morning bulletin".into(),
            slug: None,
            content: DEFAULT_CONTENT.into(),
            status: ArticleStatus::Draft,
            is_sticky: false,
            author_ids: vec![1],
            publisher_id: None,
            published_at: None,
            created_at: Utc::now(),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn status(mut self, status: ArticleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn published(mut self) -> Self {
        self.status = ArticleStatus::Published;
        self.published_at = Some(Utc::now());
        self
    }

    pub fn sticky(mut self) -> Self {
        self.is_sticky = true;
        self
    }

    pub fn authors(mut self, ids: &[i64]) -> Self {
        self.author_ids = ids.to_vec();
        self
    }

    pub fn publisher(mut self, publisher_id: i64) -> Self {
        self.publisher_id = Some(publisher_id);
        self
    }

    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self
    }

    pub fn build(self) -> Article {
        let content = ArticleContent::new(self.content).unwrap();
        let slug = self.slug.unwrap_or_else(|| format!("article-{}", self.id));
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            slug: ArticleSlug::new(slug).unwrap(),
            excerpt: content.excerpt(),
            reading_time: content.reading_time(),
            content,
            status: self.status,
            is_sticky: self.is_sticky,
            view_count: 0,
            author_ids: self
                .author_ids
                .into_iter()
                .map(|id| UserId::new(id).unwrap())
                .collect(),
            publisher_id: self.publisher_id.map(|id| PublisherId::new(id).unwrap()),
            approved_by: None,
            published_at: self.published_at,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

pub fn publisher(id: i64, name: &str) -> Publisher {
    Publisher {
        id: PublisherId::new(id).unwrap(),
        name: PublisherName::new(name).unwrap(),
        description: PublisherDescription::new(format!("{name} newsroom")).unwrap(),
        website: None,
        is_active: true,
        created_at: Utc::now(),
    }
}

/// Acting identity with the capability set the role implies.
pub fn authenticated(id: i64, role: Role) -> AuthenticatedUser {
    AuthenticatedUser::from_user(
        &UserBuilder::new()
            .id(id)
            .username(format!("user-{id}"))
            .role(role)
            .build(),
    )
}
