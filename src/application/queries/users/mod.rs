// src/application/queries/users/mod.rs
mod directory;
mod profile;
mod service;

pub use service::UserQueryService;
