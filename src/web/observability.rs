use axum::{
    extract::{MatchedPath, Request, State},
    http::HeaderValue,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{Instrument, debug, info, info_span};
use uuid::Uuid;

use crate::web::AppState;

pub async fn get_metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.prometheus_handle.as_ref().map_or_else(
        || "Metrics not enabled or failed to initialize".to_string(),
        metrics_exporter_prometheus::PrometheusHandle::render,
    )
}

/// What a request was for, taken from the route it matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RequestKind {
    Page(&'static str),
    Asset,
    Operational,
    Unmatched,
}

impl RequestKind {
    fn from_route(route: Option<&str>) -> Self {
        match route {
            Some("/") => Self::Page("home"),
            Some("/categories") => Self::Page("categories"),
            Some("/news") => Self::Page("news"),
            Some("/resources") => Self::Page("resources"),
            Some("/scam-alerts") => Self::Page("scam_alerts"),
            Some("/verify-email" | "/verify-email/resend") => Self::Page("verify_email"),
            Some("/reviews/write") => Self::Page("write_review"),
            Some("/assets/{*path}") => Self::Asset,
            Some("/healthz" | "/metrics") => Self::Operational,
            _ => Self::Unmatched,
        }
    }

    /// Metric label. Every asset and every unknown path shares one value.
    const fn label(self) -> &'static str {
        match self {
            Self::Page(name) => name,
            Self::Asset => "assets",
            Self::Operational => "operational",
            Self::Unmatched => "unmatched",
        }
    }
}

pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let kind = RequestKind::from_route(
        req.extensions()
            .get::<MatchedPath>()
            .map(MatchedPath::as_str),
    );

    let span = info_span!(
        "request",
        request_id = %Uuid::new_v4(),
        method = %method,
        path = %path,
        page = kind.label(),
    );

    async move {
        let response = next.run(req).await;
        let status = response.status();
        let elapsed = start.elapsed();

        let labels = [
            ("method", method.to_string()),
            ("page", kind.label().to_string()),
            ("status", status.as_u16().to_string()),
        ];
        metrics::counter!("http_requests_total", &labels).increment(1);

        match kind {
            RequestKind::Page(name) => {
                metrics::histogram!("http_request_duration_seconds", &labels)
                    .record(elapsed.as_secs_f64());
                info!(
                    event = "http_request_finished",
                    page = name,
                    status_code = status.as_u16(),
                    duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
                    "Page served"
                );
            }
            RequestKind::Unmatched => {
                info!(
                    event = "http_request_finished",
                    status_code = status.as_u16(),
                    "No route matched"
                );
            }
            RequestKind::Asset | RequestKind::Operational => {
                debug!(
                    event = "http_request_finished",
                    status_code = status.as_u16(),
                    "Request finished"
                );
            }
        }

        response
    }
    .instrument(span)
    .await
}

const SECURITY_HEADERS: [(&str, &str); 4] = [
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "DENY"),
    ("referrer-policy", "strict-origin-when-cross-origin"),
    (
        "content-security-policy",
        "default-src 'self'; img-src 'self' data:; script-src 'self'; style-src 'self' 'unsafe-inline'; form-action 'self'; frame-ancestors 'none'; base-uri 'self'",
    ),
];

pub async fn security_headers_middleware(req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();
    for (name, value) in SECURITY_HEADERS {
        headers.insert(name, HeaderValue::from_static(value));
    }
    response
}
