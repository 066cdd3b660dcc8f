// src/infrastructure/time.rs
use chrono::{DateTime, Utc};

use crate::application::ports::time::Clock;

/// Production clock; the one place `Utc::now()` is called on behalf of the
/// application layer.
#[derive(Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
