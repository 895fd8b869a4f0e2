use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::Config;
use crate::render::PageContext;
use crate::state::SharedState;

mod assets;
mod error;
pub mod flash;
mod observability;
mod pages;
mod reviews;
mod verification;

pub use error::PageError;

use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub struct AppState {
    pub shared: Arc<SharedState>,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.shared.config
    }

    #[must_use]
    pub fn directory(&self) -> &crate::services::DirectoryLoader {
        &self.shared.directory
    }

    /// Chrome values for rendering; the year is taken per request.
    #[must_use]
    pub fn page_context(&self) -> PageContext {
        PageContext::new(self.shared.config.site.clone())
    }
}

#[must_use]
pub fn create_app_state(
    shared: Arc<SharedState>,
    prometheus_handle: Option<PrometheusHandle>,
) -> Arc<AppState> {
    Arc::new(AppState {
        shared,
        prometheus_handle,
    })
}

pub async fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let shared = Arc::new(SharedState::new(config).await?);
    Ok(create_app_state(shared, prometheus_handle))
}

pub fn router(state: Arc<AppState>) -> Router {
    let server = &state.config().server;

    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(server.secure_cookies)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::minutes(
            server.session_inactivity_minutes,
        )));

    let page_routes = Router::new()
        .route("/", get(pages::home))
        .route("/categories", get(pages::categories))
        .route("/news", get(pages::news))
        .route("/resources", get(pages::resources))
        .route("/scam-alerts", get(pages::scam_alerts))
        .route("/verify-email", get(verification::verify_email))
        .route("/verify-email/resend", post(verification::resend))
        .route(
            "/reviews/write",
            get(reviews::write_review).post(reviews::submit_review),
        )
        .layer(session_layer);

    Router::new()
        .merge(page_routes)
        .route("/healthz", get(pages::healthz))
        .route("/metrics", get(observability::get_metrics))
        .route("/assets/{*path}", get(assets::serve_asset))
        .fallback(pages::not_found)
        .with_state(state)
        .layer(middleware::from_fn(observability::security_headers_middleware))
        .layer(middleware::from_fn(observability::logging_middleware))
        .layer(TraceLayer::new_for_http())
}
