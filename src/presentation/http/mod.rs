// src/presentation/http/mod.rs
// Axum surface over the application services: router assembly, bearer-token
// extractors, error translation, and the OpenAPI document.
pub mod controllers;
pub mod error;
pub mod extractors;
pub mod openapi;
pub mod routes;
pub mod state;
