// src/application/queries/articles/mod.rs
mod feed;
mod get_by_slug;
mod list;
mod queue;
mod service;

pub use feed::ArticleFeedQuery;
pub use get_by_slug::GetArticleBySlugQuery;
pub use list::{ArticleSort, ListArticlesQuery};
pub use service::ArticleQueryService;
