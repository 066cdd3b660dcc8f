// src/presentation/http/controllers/mod.rs
pub mod approvals;
pub mod articles;
pub mod engagement;
pub mod feeds;
pub mod newsletters;
pub mod publishers;
pub mod subscriptions;
pub mod users;
