use std::fmt::Write;

use axum::http::StatusCode;

use crate::render::components::{self, CloseConfig, HeadConfig};
use crate::render::{PageContext, text};

#[must_use]
pub fn render(ctx: &PageContext, status: StatusCode) -> String {
    let (title, message) = if status == StatusCode::NOT_FOUND {
        (
            "Page Not Found",
            "The page you are looking for doesn't exist or has been moved.",
        )
    } else {
        (
            "Something Went Wrong",
            "We hit an unexpected problem while loading this page. Please try again shortly.",
        )
    };

    let mut head = HeadConfig::new(title).body_class("page-error");
    head.noindex = true;

    let mut main = String::with_capacity(512);
    main.push_str("<section class=\"error-page\">\n<div class=\"container narrow text-center\">\n");
    let _ = writeln!(main, "<p class=\"error-code\">{}</p>", status.as_u16());
    let _ = writeln!(main, "<h1>{}</h1>", text(title));
    let _ = writeln!(main, "<p>{}</p>", text(message));
    main.push_str("<div class=\"error-actions\">\n");
    main.push_str("  <a class=\"btn btn-primary\" href=\"/\">Go to Homepage</a>\n");
    main.push_str("  <a class=\"btn btn-outline\" href=\"/categories\">Browse Categories</a>\n");
    main.push_str("</div>\n</div>\n</section>\n");

    components::layout(ctx, &head, None, &main, &CloseConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_context;

    #[test]
    fn test_not_found_and_server_error_variants() {
        let html = render(&test_context(), StatusCode::NOT_FOUND);
        assert!(html.contains("<p class=\"error-code\">404</p>"));
        assert!(html.contains("Page Not Found"));
        assert!(html.contains("content=\"noindex\""));

        let html = render(&test_context(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(html.contains("500"));
        assert!(html.contains("Something Went Wrong"));
    }
}
