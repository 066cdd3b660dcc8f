// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService, engagement::EngagementCommandService,
            newsletters::NewsletterCommandService, publishers::PublisherCommandService,
            subscriptions::SubscriptionCommandService, users::UserCommandService,
        },
        notifications::{NotificationDispatcher, NotificationSettings},
        ports::{
            identity::IdentityResolver,
            notify::{Mailer, SocialBroadcaster},
            time::Clock,
            util::SlugGenerator,
        },
        queries::{
            articles::ArticleQueryService, engagement::EngagementQueryService,
            newsletters::NewsletterQueryService, publishers::PublisherQueryService,
            subscriptions::SubscriptionQueryService, users::UserQueryService,
        },
    },
    domain::{
        article::{
            ArticleReadRepository, ArticleWriteRepository, TrendingWindow,
            services::ArticleSlugService,
        },
        engagement::EngagementRepository,
        newsletter::NewsletterRepository,
        publisher::PublisherRepository,
        subscription::SubscriptionRepository,
        user::UserRepository,
    },
};

/// Everything the application layer needs injected, gathered into one
/// struct so call sites stay readable as the repo list grows.
pub struct ApplicationDependencies {
    pub user_repo: Arc<dyn UserRepository>,
    pub publisher_repo: Arc<dyn PublisherRepository>,
    pub article_write_repo: Arc<dyn ArticleWriteRepository>,
    pub article_read_repo: Arc<dyn ArticleReadRepository>,
    pub subscription_repo: Arc<dyn SubscriptionRepository>,
    pub engagement_repo: Arc<dyn EngagementRepository>,
    pub newsletter_repo: Arc<dyn NewsletterRepository>,
    pub identity_resolver: Arc<dyn IdentityResolver>,
    pub mailer: Arc<dyn Mailer>,
    pub social: Option<Arc<dyn SocialBroadcaster>>,
    pub clock: Arc<dyn Clock>,
    pub slugger: Arc<dyn SlugGenerator>,
    pub trending: TrendingWindow,
    pub notifications: NotificationSettings,
}

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub engagement_commands: Arc<EngagementCommandService>,
    pub engagement_queries: Arc<EngagementQueryService>,
    pub newsletter_commands: Arc<NewsletterCommandService>,
    pub newsletter_queries: Arc<NewsletterQueryService>,
    pub publisher_commands: Arc<PublisherCommandService>,
    pub publisher_queries: Arc<PublisherQueryService>,
    pub subscription_commands: Arc<SubscriptionCommandService>,
    pub subscription_queries: Arc<SubscriptionQueryService>,
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    identity_resolver: Arc<dyn IdentityResolver>,
}

impl ApplicationServices {
    pub fn new(deps: ApplicationDependencies) -> Self {
        let dispatcher = Arc::new(NotificationDispatcher::new(
            Arc::clone(&deps.subscription_repo),
            Arc::clone(&deps.user_repo),
            Arc::clone(&deps.mailer),
            deps.social.clone(),
            deps.notifications.clone(),
        ));

        let slug_service = Arc::new(ArticleSlugService::new(
            Arc::clone(&deps.article_read_repo),
            Arc::clone(&deps.slugger),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&deps.article_write_repo),
            Arc::clone(&deps.article_read_repo),
            Arc::clone(&deps.publisher_repo),
            Arc::clone(&deps.user_repo),
            slug_service,
            dispatcher,
            Arc::clone(&deps.clock),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&deps.article_read_repo),
            Arc::clone(&deps.subscription_repo),
            Arc::clone(&deps.publisher_repo),
            Arc::clone(&deps.user_repo),
            deps.trending,
        ));

        let engagement_commands = Arc::new(EngagementCommandService::new(
            Arc::clone(&deps.engagement_repo),
            Arc::clone(&deps.article_read_repo),
            Arc::clone(&deps.article_write_repo),
            Arc::clone(&deps.clock),
        ));
        let engagement_queries = Arc::new(EngagementQueryService::new(
            Arc::clone(&deps.engagement_repo),
            Arc::clone(&deps.article_read_repo),
        ));

        let newsletter_commands = Arc::new(NewsletterCommandService::new(
            Arc::clone(&deps.newsletter_repo),
            Arc::clone(&deps.publisher_repo),
            Arc::clone(&deps.article_read_repo),
            Arc::clone(&deps.clock),
        ));
        let newsletter_queries = Arc::new(NewsletterQueryService::new(
            Arc::clone(&deps.newsletter_repo),
            Arc::clone(&deps.publisher_repo),
            Arc::clone(&deps.user_repo),
        ));

        let publisher_commands = Arc::new(PublisherCommandService::new(
            Arc::clone(&deps.publisher_repo),
            Arc::clone(&deps.user_repo),
            Arc::clone(&deps.clock),
        ));
        let publisher_queries = Arc::new(PublisherQueryService::new(
            Arc::clone(&deps.publisher_repo),
            Arc::clone(&deps.subscription_repo),
        ));

        let subscription_commands = Arc::new(SubscriptionCommandService::new(
            Arc::clone(&deps.subscription_repo),
            Arc::clone(&deps.publisher_repo),
            Arc::clone(&deps.user_repo),
        ));
        let subscription_queries = Arc::new(SubscriptionQueryService::new(Arc::clone(
            &deps.subscription_repo,
        )));

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&deps.user_repo),
            Arc::clone(&deps.clock),
        ));
        let user_queries = Arc::new(UserQueryService::new(
            Arc::clone(&deps.user_repo),
            Arc::clone(&deps.article_read_repo),
            Arc::clone(&deps.subscription_repo),
        ));

        Self {
            article_commands,
            article_queries,
            engagement_commands,
            engagement_queries,
            newsletter_commands,
            newsletter_queries,
            publisher_commands,
            publisher_queries,
            subscription_commands,
            subscription_queries,
            user_commands,
            user_queries,
            identity_resolver: deps.identity_resolver,
        }
    }

    pub fn identity_resolver(&self) -> Arc<dyn IdentityResolver> {
        Arc::clone(&self.identity_resolver)
    }
}
