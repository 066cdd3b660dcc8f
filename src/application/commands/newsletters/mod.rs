// src/application/commands/newsletters/mod.rs
mod create;
mod service;

pub use create::CreateNewsletterCommand;
pub use service::NewsletterCommandService;
