// src/infrastructure/notify/mod.rs
use crate::application::ports::notify::{
    Mailer, NotificationFailure, OutboundEmail, SocialBroadcaster,
};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use tracing::info;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

fn build_client() -> Result<reqwest::Client, NotificationFailure> {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|err| NotificationFailure(format!("http client init failed: {err}")))
}

#[derive(Serialize)]
struct RelayPayload<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    body: &'a str,
}

/// Delivers mail by posting JSON to an HTTP relay endpoint.
pub struct HttpRelayMailer {
    client: reqwest::Client,
    relay_url: String,
}

impl HttpRelayMailer {
    pub fn new(relay_url: String) -> Result<Self, NotificationFailure> {
        Ok(Self {
            client: build_client()?,
            relay_url,
        })
    }
}

#[async_trait]
impl Mailer for HttpRelayMailer {
    async fn send(&self, email: OutboundEmail) -> Result<(), NotificationFailure> {
        let payload = RelayPayload {
            from: &email.from,
            to: &email.to,
            subject: &email.subject,
            body: &email.body,
        };

        let response = self
            .client
            .post(&self.relay_url)
            .json(&payload)
            .send()
            .await
            .map_err(|err| NotificationFailure(format!("mail relay unreachable: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(NotificationFailure(format!(
                "mail relay returned {status}: {body}"
            )));
        }

        Ok(())
    }
}

/// Writes outbound mail to the log instead of delivering it. Stands in
/// for the relay when `MAIL_RELAY_URL` is unset so local runs still
/// show what would have been sent.
#[derive(Default, Clone)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, email: OutboundEmail) -> Result<(), NotificationFailure> {
        info!(
            to = %email.to,
            from = %email.from,
            subject = %email.subject,
            body = %email.body,
            "mail relay not configured, logging email"
        );
        Ok(())
    }
}

/// Credential bundle for the social posting API. No Debug derive:
/// every field is a secret.
#[derive(Clone)]
pub struct SocialCredentials {
    pub api_key: String,
    pub api_secret: String,
    pub access_token: String,
    pub access_secret: String,
}

#[derive(Serialize)]
struct SocialPayload<'a> {
    api_key: &'a str,
    api_secret: &'a str,
    access_token: &'a str,
    access_secret: &'a str,
    status: &'a str,
}

/// Posts status updates by forwarding the credential bundle and text
/// to the configured endpoint.
pub struct HttpSocialBroadcaster {
    client: reqwest::Client,
    post_url: String,
    credentials: SocialCredentials,
}

impl HttpSocialBroadcaster {
    pub fn new(post_url: String, credentials: SocialCredentials) -> Result<Self, NotificationFailure> {
        Ok(Self {
            client: build_client()?,
            post_url,
            credentials,
        })
    }
}

#[async_trait]
impl SocialBroadcaster for HttpSocialBroadcaster {
    async fn post_update(&self, text: &str) -> Result<(), NotificationFailure> {
        let payload = SocialPayload {
            api_key: &self.credentials.api_key,
            api_secret: &self.credentials.api_secret,
            access_token: &self.credentials.access_token,
            access_secret: &self.credentials.access_secret,
            status: text,
        };

        let response = self
            .client
            .post(&self.post_url)
            .json(&payload)
            .send()
            .await
            .map_err(|err| NotificationFailure(format!("social endpoint unreachable: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(NotificationFailure(format!(
                "social endpoint returned {status}: {body}"
            )));
        }

        Ok(())
    }
}
