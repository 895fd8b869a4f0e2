//! Email verification status page.
//!
//! The `status` query parameter selects exactly one of four branches. A
//! missing parameter is treated as a fresh sign-up waiting on its email.

use std::fmt::Write;

use crate::render::components::{self, Align, CloseConfig, HeadConfig};
use crate::render::{PageContext, text};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationStatus {
    Pending,
    Success,
    Expired,
    Invalid,
}

impl VerificationStatus {
    /// Absent means `Pending`; anything unrecognized is `Invalid`.
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return Self::Pending;
        };
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Self::Pending,
            "success" => Self::Success,
            "expired" => Self::Expired,
            _ => Self::Invalid,
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Pending => "Check Your Email",
            Self::Success => "Email Verified",
            Self::Expired => "Verification Link Expired",
            Self::Invalid => "Invalid Verification Link",
        }
    }
}

/// `jane@example.com` becomes `j***@example.com`.
#[must_use]
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first = local.chars().next().map(String::from).unwrap_or_default();
            format!("{first}***@{domain}")
        }
        None => "***".to_string(),
    }
}

#[derive(Debug, Clone, Default)]
pub struct VerifyEmailPage {
    pub email: Option<String>,
    /// Seconds until another resend is allowed; zero when allowed now.
    pub cooldown_remaining: i64,
    pub errors: Vec<String>,
    pub success: Option<String>,
}

#[must_use]
pub fn render(ctx: &PageContext, status: VerificationStatus, page: &VerifyEmailPage) -> String {
    let mut head = HeadConfig::new(status.title())
        .description("Confirm your email address to finish setting up your account.")
        .canonical("/verify-email");
    head.noindex = true;

    let mut main = components::page_header(status.title(), None, Align::Center);
    main.push_str("<div class=\"container narrow verify-email\">\n");
    main.push_str(&components::flash_messages(
        &page.errors,
        page.success.as_deref(),
    ));

    match status {
        VerificationStatus::Pending => {
            match &page.email {
                Some(email) => {
                    let _ = writeln!(
                        main,
                        "<p>We sent a verification link to <strong>{}</strong>. Click the link in that email to activate your account.</p>",
                        text(&mask_email(email))
                    );
                }
                None => main.push_str(
                    "<p>We sent you a verification link. Click the link in that email to activate your account.</p>\n",
                ),
            }
            main.push_str("<p class=\"muted\">Didn't get it? Check your spam folder or request a new email.</p>\n");
            resend_form(&mut main, page.cooldown_remaining);
        }
        VerificationStatus::Success => {
            main.push_str("<div class=\"status-icon status-success\" aria-hidden=\"true\"></div>\n");
            main.push_str("<p>Your email address has been verified. You can now sign in to your account.</p>\n");
            main.push_str("<a class=\"btn btn-primary\" href=\"/login\">Continue to Login</a>\n");
        }
        VerificationStatus::Expired => {
            main.push_str("<div class=\"status-icon status-warning\" aria-hidden=\"true\"></div>\n");
            main.push_str("<p>This verification link has expired. Request a new one below.</p>\n");
            resend_form(&mut main, page.cooldown_remaining);
        }
        VerificationStatus::Invalid => {
            main.push_str("<div class=\"status-icon status-error\" aria-hidden=\"true\"></div>\n");
            main.push_str("<p>This verification link is not valid. Make sure you copied the full link from your email.</p>\n");
            main.push_str("<a class=\"btn btn-secondary\" href=\"/\">Return Home</a>\n");
        }
    }

    main.push_str("</div>\n");
    components::layout(
        ctx,
        &head,
        None,
        &main,
        &CloseConfig::with_script("js/verify-email.js"),
    )
}

fn resend_form(html: &mut String, cooldown_remaining: i64) {
    let remaining = cooldown_remaining.max(0);
    html.push_str("<form class=\"resend-form\" method=\"post\" action=\"/verify-email/resend\">\n");
    if remaining > 0 {
        let _ = writeln!(
            html,
            "  <button class=\"btn btn-secondary\" type=\"submit\" disabled data-cooldown=\"{remaining}\">Resend Verification Email</button>"
        );
        let _ = writeln!(
            html,
            "  <p class=\"muted cooldown\">You can request another email in <span class=\"cooldown-seconds\">{remaining}</span> seconds.</p>"
        );
    } else {
        html.push_str(
            "  <button class=\"btn btn-secondary\" type=\"submit\">Resend Verification Email</button>\n",
        );
    }
    html.push_str("</form>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_context;

    #[test]
    fn test_status_parsing() {
        assert_eq!(VerificationStatus::parse(None), VerificationStatus::Pending);
        assert_eq!(VerificationStatus::parse(Some("success")), VerificationStatus::Success);
        assert_eq!(VerificationStatus::parse(Some("EXPIRED")), VerificationStatus::Expired);
        assert_eq!(VerificationStatus::parse(Some("bogus")), VerificationStatus::Invalid);
        assert_eq!(VerificationStatus::parse(Some("")), VerificationStatus::Invalid);
    }

    #[test]
    fn test_success_has_single_login_action() {
        let html = render(
            &test_context(),
            VerificationStatus::Success,
            &VerifyEmailPage::default(),
        );
        assert_eq!(html.matches("btn btn-primary").count(), 1);
        assert!(html.contains("class=\"btn btn-primary\" href=\"/login\""));
        assert!(!html.contains("resend-form"));
    }

    #[test]
    fn test_expired_offers_resend_only() {
        let html = render(
            &test_context(),
            VerificationStatus::Expired,
            &VerifyEmailPage::default(),
        );
        assert!(html.contains("action=\"/verify-email/resend\""));
        assert!(!html.contains("Email Verified"));
        assert!(!html.contains("Invalid Verification Link"));
        assert!(!html.contains("href=\"/login\""));
    }

    #[test]
    fn test_pending_masks_email_and_shows_cooldown() {
        let page = VerifyEmailPage {
            email: Some("jane@example.com".to_string()),
            cooldown_remaining: 42,
            ..Default::default()
        };
        let html = render(&test_context(), VerificationStatus::Pending, &page);
        assert!(html.contains("<strong>j***@example.com</strong>"));
        assert!(!html.contains("jane@example.com"));
        assert!(html.contains("disabled data-cooldown=\"42\""));
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("bob@test.org"), "b***@test.org");
        assert_eq!(mask_email("@test.org"), "***@test.org");
        assert_eq!(mask_email("nobody"), "***");
    }
}
