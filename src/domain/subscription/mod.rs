// src/domain/subscription/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{SubscriptionTarget, Subscriptions};
pub use repository::SubscriptionRepository;
