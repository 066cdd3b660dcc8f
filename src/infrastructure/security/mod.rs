// src/infrastructure/security/mod.rs
mod api_token;

pub use api_token::ApiTokenIdentityResolver;
