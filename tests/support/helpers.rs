// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks;
use axum::body;
use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde_json::Value;

use newsroom_core::application::notifications::NotificationSettings;
use newsroom_core::application::ports::identity::IdentityResolver;
use newsroom_core::application::ports::notify::SocialBroadcaster;
use newsroom_core::application::services::{ApplicationDependencies, ApplicationServices};
use newsroom_core::domain::article::TrendingWindow;
use newsroom_core::infrastructure::security::ApiTokenIdentityResolver;
use newsroom_core::presentation::http::routes::build_router;
use newsroom_core::presentation::http::state::HttpState;

pub const SITE_URL: &str = "http://news.test";
pub const MAIL_FROM: &str = "alerts@news.test";

/// Every in-memory collaborator of one test run, shared with the services
/// built from it so assertions can reach behind the API.
pub struct TestBackend {
    pub users: Arc<mocks::InMemoryUsers>,
    pub articles: Arc<mocks::InMemoryArticles>,
    pub publishers: Arc<mocks::InMemoryPublishers>,
    pub subscriptions: Arc<mocks::InMemorySubscriptions>,
    pub engagement: Arc<mocks::InMemoryEngagement>,
    pub newsletters: Arc<mocks::InMemoryNewsletters>,
    pub mailer: Arc<mocks::RecordingMailer>,
    pub social: Arc<mocks::RecordingSocial>,
    pub clock: Arc<mocks::FixedClock>,
    social_enabled: bool,
}

impl TestBackend {
    pub fn new() -> Self {
        let users = Arc::new(mocks::InMemoryUsers::new());
        Self {
            engagement: Arc::new(mocks::InMemoryEngagement::new(Arc::clone(&users))),
            users,
            articles: Arc::new(mocks::InMemoryArticles::new()),
            publishers: Arc::new(mocks::InMemoryPublishers::new()),
            subscriptions: Arc::new(mocks::InMemorySubscriptions::new()),
            newsletters: Arc::new(mocks::InMemoryNewsletters::new()),
            mailer: Arc::new(mocks::RecordingMailer::new()),
            social: Arc::new(mocks::RecordingSocial::new()),
            clock: Arc::new(mocks::FixedClock::default()),
            social_enabled: true,
        }
    }

    pub fn without_social(mut self) -> Self {
        self.social_enabled = false;
        self
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.0
    }

    pub fn services(&self) -> Arc<ApplicationServices> {
        let identity_resolver: Arc<dyn IdentityResolver> =
            Arc::new(ApiTokenIdentityResolver::new(self.users.clone()));
        let social = self
            .social_enabled
            .then(|| self.social.clone() as Arc<dyn SocialBroadcaster>);

        Arc::new(ApplicationServices::new(ApplicationDependencies {
            user_repo: self.users.clone(),
            publisher_repo: self.publishers.clone(),
            article_write_repo: self.articles.clone(),
            article_read_repo: self.articles.clone(),
            subscription_repo: self.subscriptions.clone(),
            engagement_repo: self.engagement.clone(),
            newsletter_repo: self.newsletters.clone(),
            identity_resolver,
            mailer: self.mailer.clone(),
            social,
            clock: self.clock.clone(),
            slugger: Arc::new(mocks::DummySlug),
            trending: TrendingWindow::default(),
            notifications: NotificationSettings {
                site_base_url: SITE_URL.to_owned(),
                mail_from: MAIL_FROM.to_owned(),
                fanout_concurrency: 4,
            },
        }))
    }

    pub fn router(&self) -> axum::Router {
        build_router(HttpState {
            services: self.services(),
        })
    }
}

/// Assert that a response is an ErrorResponse JSON with the expected status
/// and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json: Value = serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}

/// Publication fan-out runs on a detached task; poll the mailer until the
/// expected number of sends has landed.
pub async fn wait_for_sends(mailer: &mocks::RecordingMailer, expected: usize) {
    for _ in 0..200 {
        if mailer.sent().len() >= expected {
            return;
        }
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }
    panic!(
        "fan-out delivered {} emails, expected {expected}",
        mailer.sent().len()
    );
}

/// Reads a response body as JSON after checking the status code.
pub async fn body_json(resp: axum::response::Response, expected_status: StatusCode) -> Value {
    let status = resp.status();
    let body_bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    if status != expected_status {
        let text = String::from_utf8_lossy(&body_bytes);
        panic!("expected {expected_status}, got {status}: {text}");
    }
    serde_json::from_slice(&body_bytes).expect("expected valid json body")
}
