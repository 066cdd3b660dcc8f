// src/application/commands/articles/mod.rs
mod create;
mod delete;
mod service;
mod transition;
mod update;

pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use delete::DeleteArticleCommand;
pub use service::ArticleCommandService;
pub use transition::TransitionArticleCommand;
pub use update::UpdateArticleCommand;
