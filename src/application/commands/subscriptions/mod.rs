// src/application/commands/subscriptions/mod.rs
mod change;
mod service;

pub use change::ChangeSubscriptionCommand;
pub use service::SubscriptionCommandService;
