// src/application/ports/notify.rs
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("notification failure: {0}")]
pub struct NotificationFailure(pub String);

#[derive(Debug, Clone)]
pub struct OutboundEmail {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub body: String,
}

/// One delivery attempt per call; retries are the caller's decision.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: OutboundEmail) -> Result<(), NotificationFailure>;
}

/// Posts a short status update to the configured social account.
#[async_trait]
pub trait SocialBroadcaster: Send + Sync {
    async fn post_update(&self, text: &str) -> Result<(), NotificationFailure>;
}
