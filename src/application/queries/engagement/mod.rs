// src/application/queries/engagement/mod.rs
mod comments;
mod service;

pub use service::EngagementQueryService;
