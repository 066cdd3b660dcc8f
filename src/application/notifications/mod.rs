// src/application/notifications/mod.rs
use std::collections::BTreeSet;
use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tracing::{info, warn};
use uuid::Uuid;

use crate::application::ports::notify::{Mailer, OutboundEmail, SocialBroadcaster};
use crate::domain::{
    article::ArticlePublished,
    errors::DomainResult,
    subscription::SubscriptionRepository,
    user::{UserId, UserRepository},
};

/// Knobs the dispatcher needs from configuration.
#[derive(Debug, Clone)]
pub struct NotificationSettings {
    pub site_base_url: String,
    pub mail_from: String,
    pub fanout_concurrency: usize,
}

/// Outcome of one dispatch run. Logged, never returned over HTTP.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchReport {
    pub recipients: usize,
    pub delivered: usize,
    pub failed: usize,
    pub social_posted: bool,
}

/// Fans a publication event out to subscriber inboxes and, when a social
/// account is configured, to one status post. Nothing in here may fail the
/// publish that triggered it.
pub struct NotificationDispatcher {
    subscription_repo: Arc<dyn SubscriptionRepository>,
    user_repo: Arc<dyn UserRepository>,
    mailer: Arc<dyn Mailer>,
    social: Option<Arc<dyn SocialBroadcaster>>,
    settings: NotificationSettings,
}

impl NotificationDispatcher {
    pub fn new(
        subscription_repo: Arc<dyn SubscriptionRepository>,
        user_repo: Arc<dyn UserRepository>,
        mailer: Arc<dyn Mailer>,
        social: Option<Arc<dyn SocialBroadcaster>>,
        settings: NotificationSettings,
    ) -> Self {
        Self {
            subscription_repo,
            user_repo,
            mailer,
            social,
            settings,
        }
    }

    /// Runs the fan-out on a detached task so the publishing request
    /// returns as soon as the article row is committed.
    pub fn dispatch_detached(self: &Arc<Self>, event: ArticlePublished) {
        let dispatcher = Arc::clone(self);
        tokio::spawn(async move {
            dispatcher.notify_publication(&event).await;
        });
    }

    pub async fn notify_publication(&self, event: &ArticlePublished) -> DispatchReport {
        let run_id = Uuid::new_v4();
        let recipient_ids = match self.resolve_recipients(event).await {
            Ok(ids) => ids,
            Err(error) => {
                warn!(%run_id, slug = %event.slug, %error, "could not resolve recipients");
                return DispatchReport::default();
            }
        };

        let mut report = DispatchReport {
            recipients: recipient_ids.len(),
            ..DispatchReport::default()
        };

        let url = self.article_url(&event.slug);
        let subject = format!("New Article Published: {}", event.title);
        let body = format!(
            "\"{}\" has just been published.\n\nRead it at {url}\n\nYou are receiving this because of your subscriptions. Visit {}/subscriptions to change them.\n",
            event.title,
            self.base_url(),
        );

        let mailable = match self.user_repo.find_by_ids(&recipient_ids).await {
            Ok(users) => users
                .into_iter()
                .filter(|user| user.is_active)
                .filter_map(|user| user.email)
                .collect::<Vec<_>>(),
            Err(error) => {
                warn!(%run_id, slug = %event.slug, %error, "could not load recipient accounts");
                return report;
            }
        };

        let sends = mailable.into_iter().map(|address| {
            let email = OutboundEmail {
                to: address.to_string(),
                from: self.settings.mail_from.clone(),
                subject: subject.clone(),
                body: body.clone(),
            };
            async move {
                let to = email.to.clone();
                (to, self.mailer.send(email).await)
            }
        });
        let mut deliveries =
            stream::iter(sends).buffer_unordered(self.settings.fanout_concurrency.max(1));
        while let Some((to, outcome)) = deliveries.next().await {
            match outcome {
                Ok(()) => report.delivered += 1,
                Err(failure) => {
                    report.failed += 1;
                    warn!(%run_id, recipient = %to, %failure, "notification email failed");
                }
            }
        }

        if let Some(social) = &self.social {
            let text = format!("New article: {}\n{url}", event.title);
            match social.post_update(&text).await {
                Ok(()) => report.social_posted = true,
                Err(failure) => warn!(%run_id, %failure, "social broadcast failed"),
            }
        }

        info!(
            %run_id,
            slug = %event.slug,
            recipients = report.recipients,
            delivered = report.delivered,
            failed = report.failed,
            social_posted = report.social_posted,
            "publication fan-out finished"
        );
        report
    }

    /// Union of the publisher's subscribers and every author's followers,
    /// deduplicated.
    async fn resolve_recipients(&self, event: &ArticlePublished) -> DomainResult<Vec<UserId>> {
        let mut ids = BTreeSet::new();
        if let Some(publisher_id) = event.publisher_id {
            ids.extend(
                self.subscription_repo
                    .publisher_subscriber_ids(publisher_id)
                    .await?,
            );
        }
        for author_id in &event.author_ids {
            ids.extend(
                self.subscription_repo
                    .journalist_follower_ids(*author_id)
                    .await?,
            );
        }
        Ok(ids.into_iter().collect())
    }

    fn base_url(&self) -> &str {
        self.settings.site_base_url.trim_end_matches('/')
    }

    fn article_url(&self, slug: &str) -> String {
        format!("{}/articles/{slug}", self.base_url())
    }
}
