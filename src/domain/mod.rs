// src/domain/mod.rs
pub mod article;
pub mod engagement;
pub mod errors;
pub mod newsletter;
pub mod publisher;
pub mod subscription;
pub mod user;
