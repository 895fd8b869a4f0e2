use axum::{
    Form,
    extract::{Query, State},
    response::{Html, Redirect},
};
use serde::Deserialize;
use std::sync::Arc;
use tower_sessions::Session;
use tracing::{error, info};

use crate::models::ReviewFormState;
use crate::render::pages::write_review::{self as page, WriteReviewPage};
use crate::web::flash::Flash;
use crate::web::{AppState, PageError};

#[derive(Debug, Deserialize)]
pub struct WriteReviewQuery {
    pub business: Option<String>,
}

fn parse_business_id(raw: Option<&str>) -> Option<i32> {
    raw.and_then(|id| id.trim().parse::<i32>().ok())
        .filter(|id| *id > 0)
}

fn form_url(business_id: Option<i32>) -> String {
    business_id.map_or_else(
        || "/reviews/write".to_string(),
        |id| format!("/reviews/write?business={id}"),
    )
}

pub async fn write_review(
    State(state): State<Arc<AppState>>,
    Query(query): Query<WriteReviewQuery>,
    session: Session,
) -> Result<Html<String>, PageError> {
    let ctx = state.page_context();
    let flash = Flash::new(session);

    let errors = flash
        .take_errors()
        .await
        .map_err(|e| PageError::internal(ctx.clone(), e))?;
    let success = flash
        .take_success()
        .await
        .map_err(|e| PageError::internal(ctx.clone(), e))?;
    let old_input = flash
        .take_old_input()
        .await
        .map_err(|e| PageError::internal(ctx.clone(), e))?
        .unwrap_or_default();

    let business = match parse_business_id(query.business.as_deref()) {
        Some(id) => state.directory().business_profile(id).await,
        None => None,
    };

    Ok(Html(page::render(
        &ctx,
        &WriteReviewPage {
            business,
            old_input,
            errors,
            success,
        },
    )))
}

pub async fn submit_review(
    State(state): State<Arc<AppState>>,
    session: Session,
    Form(form): Form<ReviewFormState>,
) -> Result<Redirect, PageError> {
    let ctx = state.page_context();
    let flash = Flash::new(session);
    let business_id = form.business_id();
    let redirect = Redirect::to(&form_url(business_id));

    let review = match form.validate() {
        Ok(review) => {
            if state
                .directory()
                .business_profile(review.business_id)
                .await
                .is_some()
            {
                Ok(review)
            } else {
                Err(vec!["The selected business could not be found.".to_string()])
            }
        }
        Err(errors) => Err(errors),
    };

    let errors = match review {
        Ok(review) => match state.shared.review_service.submit_review(review).await {
            Ok(id) => {
                info!(review_id = id, "Review accepted from web form");
                flash
                    .set_success("Thank you! Your review has been submitted.")
                    .await
                    .map_err(|e| PageError::internal(ctx.clone(), e))?;
                return Ok(redirect);
            }
            Err(e) => {
                error!(error = %e, business_id, "Failed to save review");
                vec!["We couldn't save your review. Please try again.".to_string()]
            }
        },
        Err(errors) => errors,
    };

    flash
        .set_errors(&errors)
        .await
        .map_err(|e| PageError::internal(ctx.clone(), e))?;
    flash
        .set_old_input(&form)
        .await
        .map_err(|e| PageError::internal(ctx, e))?;

    Ok(redirect)
}
