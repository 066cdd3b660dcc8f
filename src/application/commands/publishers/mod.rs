// src/application/commands/publishers/mod.rs
mod affiliation;
mod create;
mod service;

pub use affiliation::AddAffiliationCommand;
pub use create::CreatePublisherCommand;
pub use service::PublisherCommandService;
