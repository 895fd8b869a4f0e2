use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::fmt;

use crate::render::{PageContext, pages};

#[derive(Debug)]
pub enum PageErrorKind {
    NotFound,

    Internal(String),
}

/// An error that renders as the site's HTML error page.
///
/// Carries the page context because the error page uses the same chrome as
/// every other page.
#[derive(Debug)]
pub struct PageError {
    pub kind: PageErrorKind,
    ctx: PageContext,
}

impl PageError {
    #[must_use]
    pub const fn not_found(ctx: PageContext) -> Self {
        Self {
            kind: PageErrorKind::NotFound,
            ctx,
        }
    }

    pub fn internal(ctx: PageContext, msg: impl fmt::Display) -> Self {
        Self {
            kind: PageErrorKind::Internal(msg.to_string()),
            ctx,
        }
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self.kind {
            PageErrorKind::NotFound => StatusCode::NOT_FOUND,
            PageErrorKind::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            PageErrorKind::NotFound => write!(f, "Page not found"),
            PageErrorKind::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for PageError {}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        if let PageErrorKind::Internal(msg) = &self.kind {
            tracing::error!(error = %msg, "Request failed");
        }

        let status = self.status();
        (status, Html(pages::error::render(&self.ctx, status))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_context;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            PageError::not_found(test_context()).status(),
            StatusCode::NOT_FOUND
        );

        let err = PageError::internal(test_context(), "session store unavailable");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("session store unavailable"));
    }

    #[tokio::test]
    async fn test_not_found_renders_error_page() {
        let response = PageError::not_found(test_context()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = http_body_util::BodyExt::collect(response.into_body())
            .await
            .unwrap()
            .to_bytes();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("Page Not Found"));
    }
}
