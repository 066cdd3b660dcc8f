// src/domain/article/mod.rs
pub mod entity;
pub mod events;
pub mod repository;
pub mod services;
pub mod specifications;
pub mod value_objects;
pub mod visibility;

pub use entity::{Article, ArticleUpdate, NewArticle};
pub use events::ArticlePublished;
pub use repository::{
    ArticleReadRepository, ArticleWriteRepository, QueueScope, TrendingWindow,
};
pub use value_objects::{
    ArticleContent, ArticleId, ArticleListCursor, ArticleSlug, ArticleStatus, ArticleTitle,
};
pub use visibility::ArticleVisibility;
