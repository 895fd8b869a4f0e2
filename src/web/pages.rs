//! Read-only directory pages.

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse},
};
use serde::Deserialize;
use std::sync::Arc;

use crate::constants::limits;
use crate::models::news::slugify;
use crate::render::pages;
use crate::services::{news, resources};
use crate::web::{AppState, PageError};

pub async fn home(State(state): State<Arc<AppState>>) -> Html<String> {
    let categories = state.directory().categories_with_counts().await;
    let alerts = state
        .directory()
        .scam_alerts(limits::HOME_SCAM_ALERTS as u64)
        .await;

    Html(pages::home::render(
        &state.page_context(),
        &pages::home::HomePage {
            categories: &categories,
            alerts: &alerts,
            news: news::sample_articles(),
        },
    ))
}

pub async fn categories(State(state): State<Arc<AppState>>) -> Html<String> {
    let categories = state.directory().categories_with_counts().await;
    Html(pages::categories::render(&state.page_context(), &categories))
}

#[derive(Debug, Deserialize)]
pub struct NewsQuery {
    pub category: Option<String>,
}

pub async fn news(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NewsQuery>,
) -> Html<String> {
    let all = news::sample_articles();
    let pills = news::categories(all);

    // `Scam Watch`, `scam watch` and `scam-watch` all select the same pill.
    let selected = query
        .category
        .as_deref()
        .map(slugify)
        .filter(|slug| !slug.is_empty());

    let articles = match selected.as_deref() {
        Some(slug) => news::filter_by_category(all, slug),
        None => all.iter().collect(),
    };

    Html(pages::news::render(
        &state.page_context(),
        &pages::news::NewsPage {
            articles: &articles,
            categories: &pills,
            selected: selected.as_deref(),
        },
    ))
}

pub async fn resources(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(pages::resources::render(
        &state.page_context(),
        resources::all_resources(),
    ))
}

pub async fn scam_alerts(State(state): State<Arc<AppState>>) -> Html<String> {
    let alerts = state.directory().scam_alerts(limits::SCAM_ALERTS).await;
    Html(pages::scam_alerts::render(&state.page_context(), &alerts))
}

pub async fn not_found(State(state): State<Arc<AppState>>) -> PageError {
    PageError::not_found(state.page_context())
}

pub async fn healthz() -> impl IntoResponse {
    "ok"
}
