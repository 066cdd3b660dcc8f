use anyhow::Result;
use axum::{ServiceExt, body::Body};
use newsroom_core::application::{
    notifications::NotificationSettings,
    ports::{
        identity::IdentityResolver,
        notify::{Mailer, SocialBroadcaster},
        time::Clock,
        util::SlugGenerator,
    },
    services::{ApplicationDependencies, ApplicationServices},
};
use newsroom_core::config::AppConfig;
use newsroom_core::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository, TrendingWindow},
    engagement::EngagementRepository,
    newsletter::NewsletterRepository,
    publisher::PublisherRepository,
    subscription::SubscriptionRepository,
    user::{NewUser, Role, UserRepository, Username},
};
use newsroom_core::infrastructure::{
    database,
    notify::{HttpRelayMailer, HttpSocialBroadcaster, LogMailer, SocialCredentials},
    repositories::{
        PostgresArticleReadRepository, PostgresArticleWriteRepository,
        PostgresEngagementRepository, PostgresNewsletterRepository, PostgresPublisherRepository,
        PostgresSubscriptionRepository, PostgresUserRepository,
    },
    security::ApiTokenIdentityResolver,
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use newsroom_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let publisher_repo: Arc<dyn PublisherRepository> =
        Arc::new(PostgresPublisherRepository::new(pool.clone()));
    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(PostgresArticleWriteRepository::new(pool.clone()));
    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(PostgresArticleReadRepository::new(pool.clone()));
    let subscription_repo: Arc<dyn SubscriptionRepository> =
        Arc::new(PostgresSubscriptionRepository::new(pool.clone()));
    let engagement_repo: Arc<dyn EngagementRepository> =
        Arc::new(PostgresEngagementRepository::new(pool.clone()));
    let newsletter_repo: Arc<dyn NewsletterRepository> =
        Arc::new(PostgresNewsletterRepository::new(pool.clone()));

    let identity_resolver: Arc<dyn IdentityResolver> =
        Arc::new(ApiTokenIdentityResolver::new(Arc::clone(&user_repo)));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator::default());

    let mailer: Arc<dyn Mailer> = match config.mail_relay_url() {
        Some(url) => Arc::new(HttpRelayMailer::new(url.to_string())?),
        None => Arc::new(LogMailer),
    };

    let social: Option<Arc<dyn SocialBroadcaster>> = match config.social() {
        Some(social_config) => {
            let broadcaster = HttpSocialBroadcaster::new(
                social_config.post_url.clone(),
                SocialCredentials {
                    api_key: social_config.api_key.clone(),
                    api_secret: social_config.api_secret.clone(),
                    access_token: social_config.access_token.clone(),
                    access_secret: social_config.access_secret.clone(),
                },
            )?;
            Some(Arc::new(broadcaster))
        }
        None => None,
    };

    seed_admin(&config, user_repo.as_ref(), clock.as_ref()).await?;

    let services = Arc::new(ApplicationServices::new(ApplicationDependencies {
        user_repo,
        publisher_repo,
        article_write_repo,
        article_read_repo,
        subscription_repo,
        engagement_repo,
        newsletter_repo,
        identity_resolver,
        mailer,
        social,
        clock,
        slugger,
        trending: TrendingWindow {
            like_weight: config.trend_like_weight(),
            comment_weight: config.trend_comment_weight(),
            window_days: config.trend_window_days(),
        },
        notifications: NotificationSettings {
            site_base_url: config.site_base_url().to_string(),
            mail_from: config.mail_from().to_string(),
            fanout_concurrency: config.fanout_concurrency(),
        },
    }));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(state);
    let service = app.into_service::<Body>().into_make_service();

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Provision the first admin on an empty database. The token is logged
/// exactly once; afterwards every account comes through the API.
async fn seed_admin(
    config: &AppConfig,
    user_repo: &dyn UserRepository,
    clock: &dyn Clock,
) -> Result<()> {
    if user_repo.count().await? > 0 {
        return Ok(());
    }

    let username = Username::new(config.admin_username())?;
    let email = config
        .admin_email()
        .map(newsroom_core::domain::user::EmailAddress::new)
        .transpose()?;
    let api_token = Uuid::new_v4().simple().to_string();

    let admin = user_repo
        .insert(NewUser::new(
            username,
            email,
            Role::Admin,
            api_token.clone(),
            clock.now(),
        ))
        .await?;

    tracing::warn!(
        username = %admin.username,
        api_token = %api_token,
        "bootstrap admin created; store this token now, it is not shown again"
    );

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
