// src/application/queries/newsletters/mod.rs
mod feed;
mod service;

pub use feed::NewsletterFeedQuery;
pub use service::NewsletterQueryService;
