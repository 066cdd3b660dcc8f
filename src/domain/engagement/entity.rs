// src/domain/engagement/entity.rs
use crate::domain::article::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentId(pub i64);

impl CommentId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "comment id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CommentId> for i64 {
    fn from(value: CommentId) -> Self {
        value.0
    }
}

/// Read model of a stored comment; `author_username` is joined in by the
/// repository so listings do not fan out into user lookups.
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub article_id: ArticleId,
    pub author_id: UserId,
    pub author_username: String,
    pub parent_id: Option<CommentId>,
    pub content: String,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn is_reply(&self) -> bool {
        self.parent_id.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub article_id: ArticleId,
    pub author_id: UserId,
    pub parent_id: Option<CommentId>,
    pub content: String,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

impl NewComment {
    pub fn new(
        article_id: ArticleId,
        author_id: UserId,
        parent_id: Option<CommentId>,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let content = content.into();
        if content.trim().len() < 5 {
            return Err(DomainError::Validation(
                "comment must be at least 5 characters long".into(),
            ));
        }
        Ok(Self {
            article_id,
            author_id,
            parent_id,
            content,
            is_approved: true,
            created_at,
        })
    }
}
