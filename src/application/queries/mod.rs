// src/application/queries/mod.rs
pub mod articles;
pub mod engagement;
pub mod newsletters;
pub mod publishers;
pub mod subscriptions;
pub mod users;
