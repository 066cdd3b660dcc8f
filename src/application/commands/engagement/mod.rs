// src/application/commands/engagement/mod.rs
mod comments;
mod guard;
mod likes;
mod reading;
mod service;

pub use comments::AddCommentCommand;
pub use likes::ToggleLikeCommand;
pub use service::EngagementCommandService;
