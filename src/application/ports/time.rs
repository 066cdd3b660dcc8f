// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Injected wall clock. Command services stamp created_at/updated_at and
/// published_at through this so tests can freeze time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
