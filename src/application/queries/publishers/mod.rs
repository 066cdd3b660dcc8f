// src/application/queries/publishers/mod.rs
mod list;
mod service;

pub use service::PublisherQueryService;
