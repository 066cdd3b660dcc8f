// src/application/dto/engagement.rs
use crate::domain::engagement::Comment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: i64,
    pub article_id: i64,
    pub author_id: i64,
    pub author_username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[schema(no_recursion)]
    pub replies: Vec<CommentDto>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into(),
            article_id: comment.article_id.into(),
            author_id: comment.author_id.into(),
            author_username: comment.author_username,
            parent_id: comment.parent_id.map(Into::into),
            content: comment.content,
            created_at: comment.created_at,
            replies: Vec::new(),
        }
    }
}

impl CommentDto {
    /// Nests replies one level under their parents, preserving the
    /// oldest-first order of the flat input.
    pub fn thread(comments: Vec<Comment>) -> Vec<CommentDto> {
        let (parents, replies): (Vec<_>, Vec<_>) =
            comments.into_iter().partition(|c| !c.is_reply());
        let mut threaded: Vec<CommentDto> = parents.into_iter().map(Into::into).collect();
        for reply in replies {
            let parent_id = reply.parent_id.map(i64::from);
            let dto: CommentDto = reply.into();
            if let Some(parent) = threaded
                .iter_mut()
                .find(|parent| Some(parent.id) == parent_id)
            {
                parent.replies.push(dto);
            }
        }
        threaded
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LikeStateDto {
    pub liked: bool,
    pub like_count: u64,
}
