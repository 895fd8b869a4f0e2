use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
};
use serde::Deserialize;
use std::sync::Arc;
use tower_sessions::Session;
use tracing::info;

use crate::constants::session_keys;
use crate::render::pages::verify_email::{
    self as page, VerificationStatus, VerifyEmailPage, mask_email,
};
use crate::web::flash::Flash;
use crate::web::{AppState, PageError};

#[derive(Debug, Deserialize)]
pub struct VerifyEmailQuery {
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResendOutcome {
    NoPendingVerification,
    CoolingDown { remaining: i64 },
    Sent { email: String },
}

impl ResendOutcome {
    fn message(&self) -> String {
        match self {
            Self::NoPendingVerification => "No pending verification found.".to_string(),
            Self::CoolingDown { remaining } => {
                format!("Please wait {remaining} seconds before requesting another email.")
            }
            Self::Sent { email } => {
                format!("A new verification email has been sent to {}.", mask_email(email))
            }
        }
    }
}

fn now_unix() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Applies the resend cooldown. Only a successful resend moves the window.
async fn request_resend(
    session: &Session,
    now: i64,
    cooldown_seconds: i64,
) -> Result<ResendOutcome, tower_sessions::session::Error> {
    let Some(email) = session
        .get::<String>(session_keys::VERIFICATION_EMAIL)
        .await?
    else {
        return Ok(ResendOutcome::NoPendingVerification);
    };

    let available_at = session
        .get::<i64>(session_keys::RESEND_AVAILABLE_AT)
        .await?
        .unwrap_or(0);
    if now < available_at {
        return Ok(ResendOutcome::CoolingDown {
            remaining: available_at - now,
        });
    }

    session
        .insert(session_keys::RESEND_AVAILABLE_AT, now + cooldown_seconds)
        .await?;
    Ok(ResendOutcome::Sent { email })
}

pub async fn verify_email(
    State(state): State<Arc<AppState>>,
    Query(query): Query<VerifyEmailQuery>,
    session: Session,
) -> Result<Html<String>, PageError> {
    let ctx = state.page_context();
    let status = VerificationStatus::parse(query.status.as_deref());

    let email = session
        .get::<String>(session_keys::VERIFICATION_EMAIL)
        .await
        .map_err(|e| PageError::internal(ctx.clone(), e))?;
    let available_at = session
        .get::<i64>(session_keys::RESEND_AVAILABLE_AT)
        .await
        .map_err(|e| PageError::internal(ctx.clone(), e))?
        .unwrap_or(0);

    let flash = Flash::new(session);
    let errors = flash
        .take_errors()
        .await
        .map_err(|e| PageError::internal(ctx.clone(), e))?;
    let success = flash
        .take_success()
        .await
        .map_err(|e| PageError::internal(ctx.clone(), e))?;

    let view = VerifyEmailPage {
        email,
        cooldown_remaining: (available_at - now_unix()).max(0),
        errors,
        success,
    };

    Ok(Html(page::render(&ctx, status, &view)))
}

pub async fn resend(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> Result<Redirect, PageError> {
    let ctx = state.page_context();
    let cooldown = state.config().verification.resend_cooldown_seconds;

    let outcome = request_resend(&session, now_unix(), cooldown)
        .await
        .map_err(|e| PageError::internal(ctx.clone(), e))?;

    let flash = Flash::new(session);
    let stored = match &outcome {
        ResendOutcome::Sent { email } => {
            info!(
                email = %mask_email(email),
                cooldown_seconds = cooldown,
                "Verification email resend requested"
            );
            flash.set_success(&outcome.message()).await
        }
        _ => flash.set_errors(&[outcome.message()]).await,
    };
    stored.map_err(|e| PageError::internal(ctx, e))?;

    Ok(Redirect::to("/verify-email?status=pending"))
}
