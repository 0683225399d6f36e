use dotenvy::dotenv;
use axum::{
    routing::{get, post},
    Router,
    middleware
};
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;
use std::sync::Arc;
use std::time::Instant;
use anyhow::Context;

mod handlers {
    pub mod contact_handlers;
    pub mod contact_dtos;
    pub mod rate_limit_middleware;
}
mod config {
    pub mod app_config;
}
mod utils {
    pub mod contact_emails;
    pub mod mailer;
    pub mod rate_limiter;
}

use config::app_config::Config;
use handlers::contact_handlers;
use handlers::rate_limit_middleware;
use utils::mailer::{Mailer, SmtpMailer};
use utils::rate_limiter::RateLimiter;

pub struct AppState {
    config: Arc<Config>,
    mailer: Arc<dyn Mailer>,
    rate_limiter: Arc<RateLimiter>,
}

pub fn router(state: Arc<AppState>) -> Router {
    let contact_routes = Router::new()
        .route("/api/sendMessage", post(contact_handlers::send_message))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware::limit_contact_requests,
        ));

    Router::new()
        .route("/", get(contact_handlers::welcome))
        .route("/api/health", get(contact_handlers::health_check))
        .merge(contact_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any)
                .allow_headers([axum::http::header::CONTENT_TYPE])
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("invalid environment")?;

    // Sentry is only wired up when a DSN is configured; the guard must live
    // for the whole process.
    let _guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        }))
    });

    let mailer = SmtpMailer::from_config(&config).context("failed to set up SMTP transport")?;
    let rate_limiter = Arc::new(RateLimiter::for_contact_form());

    let state = Arc::new(AppState {
        config: Arc::new(config.clone()),
        mailer: Arc::new(mailer),
        rate_limiter: rate_limiter.clone(),
    });

    // Periodically forget clients whose window has fully elapsed
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(rate_limiter.window());
        loop {
            ticker.tick().await;
            let purged = rate_limiter.purge_expired(Instant::now());
            if purged > 0 {
                tracing::debug!(
                    purged,
                    remaining = rate_limiter.tracked_clients(),
                    "Purged idle rate limit entries"
                );
            }
        }
    });

    let app = router(state);

    use tokio::net::TcpListener;

    let listener = TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("failed to bind port {}", config.port))?;
    info!("Contact relay listening on port {}", config.port);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await
    .context("server error")?;

    Ok(())
}
