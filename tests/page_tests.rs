use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use bizdir::config::Config;
use bizdir::state::SharedState;
use http_body_util::BodyExt;
use sea_orm::ConnectionTrait;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

/// The returned directory holds the database file and removes it on drop.
async fn spawn_state(seed: bool) -> (TempDir, Arc<SharedState>) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = dir.path().join("directory.db");

    let mut config = Config::default();
    config.general.database_path = format!("sqlite:{}", db_path.display());

    let shared = SharedState::new(config)
        .await
        .expect("Failed to create shared state");
    if seed {
        bizdir::db::seed::seed_demo_data(&shared.store)
            .await
            .expect("Failed to seed demo data");
    }
    (dir, Arc::new(shared))
}

fn app_for(shared: Arc<SharedState>) -> Router {
    bizdir::web::router(bizdir::web::create_app_state(shared, None))
}

async fn spawn_app(seed: bool) -> (TempDir, Router) {
    let (dir, shared) = spawn_state(seed).await;
    (dir, app_for(shared))
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_home_page_with_seeded_directory() {
    let (_db, app) = spawn_app(true).await;
    let (status, body) = get(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<title>Business Directory</title>"));
    assert!(body.contains("Premier Car Warranty Center"));
    assert_eq!(body.matches("class=\"category-card\"").count(), 6);
    assert_eq!(body.matches("class=\"alert-card\"").count(), 3);
    assert_eq!(body.matches("class=\"news-card\"").count(), 3);
}

#[tokio::test]
async fn test_categories_show_active_business_counts() {
    let (_db, app) = spawn_app(true).await;
    let (status, body) = get(&app, "/categories").await;

    assert_eq!(status, StatusCode::OK);
    // Restaurants: two active listings
    assert!(body.contains("<h3>Restaurants</h3>\n  <p>Dining, cafes and takeout</p>\n  <span class=\"business-count\">2 businesses</span>"));
    // Automotive: one active, one suspended
    assert!(body.contains("<h3>Automotive</h3>\n  <p>Repair shops, dealers and detailing</p>\n  <span class=\"business-count\">1 business</span>"));
    // Retail: none
    assert!(body.contains("<h3>Retail</h3>\n  <p>Shops and boutiques</p>\n  <span class=\"business-count\">0 businesses</span>"));
    assert!(body.contains("aria-current=\"page\" href=\"/categories\""));
}

#[tokio::test]
async fn test_empty_directory_renders_empty_states() {
    let (_db, app) = spawn_app(false).await;

    let (status, body) = get(&app, "/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No Categories Available"));
    assert!(!body.contains("class=\"category-card\""));

    let (status, body) = get(&app, "/scam-alerts").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No Active Scam Alerts"));
}

#[tokio::test]
async fn test_failed_queries_degrade_to_empty_state() {
    let (_db, shared) = spawn_state(true).await;
    shared
        .store
        .conn
        .execute_unprepared("DROP TABLE complaints")
        .await
        .unwrap();
    let app = app_for(shared);

    let (status, body) = get(&app, "/scam-alerts").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No Active Scam Alerts"));
    assert!(!body.contains("class=\"alert-card\""));

    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No Active Scam Alerts"));
    assert!(body.contains("class=\"category-card\""));
}

#[tokio::test]
async fn test_scam_alerts_newest_first() {
    let (_db, app) = spawn_app(true).await;
    let (status, body) = get(&app, "/scam-alerts").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("class=\"alert-card\"").count(), 3);
    let premier = body.find("Premier Car Warranty Center").unwrap();
    let dream = body.find("Dream Vacations Club").unwrap();
    let roofing = body.find("QuickFix Roofing").unwrap();
    assert!(premier < dream && dream < roofing);
    assert!(!body.contains("Harbor Noodle House"));
}

#[tokio::test]
async fn test_news_filter() {
    let (_db, app) = spawn_app(false).await;

    let (_, all) = get(&app, "/news").await;
    let (status, filtered) = get(&app, "/news?category=Scam-Watch").await;
    assert_eq!(status, StatusCode::OK);
    assert!(
        filtered.matches("class=\"news-card\"").count() < all.matches("class=\"news-card\"").count()
    );
    assert!(filtered.contains("class=\"pill active\" href=\"/news?category=scam-watch\""));

    let (status, body) = get(&app, "/news?category=%3Cscript%3E").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No Articles Found"));
    assert!(!body.contains("<script>\""));
    assert!(!body.contains("class=\"pill active\""));
}

#[tokio::test]
async fn test_news_filter_accepts_display_name() {
    let (_db, app) = spawn_app(false).await;

    let (_, by_slug) = get(&app, "/news?category=scam-watch").await;
    let (status, body) = get(&app, "/news?category=Scam%20Watch").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, by_slug);

    assert!(body.contains("<title>Scam Watch News | Business Directory</title>"));
    assert!(body.contains("class=\"pill active\" href=\"/news?category=scam-watch\""));
    assert!(body.contains("rel=\"canonical\" href=\"http://localhost:8080/news?category=scam-watch\""));
    assert_eq!(body.matches("class=\"pill active\"").count(), 1);
    assert_eq!(body.matches("class=\"news-card\"").count(), 2);
}

#[tokio::test]
async fn test_resources_page() {
    let (_db, app) = spawn_app(false).await;
    let (status, body) = get(&app, "/resources").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("id=\"consumers\""));
    assert!(body.contains("id=\"businesses\""));
}

#[tokio::test]
async fn test_verification_status_branches() {
    let (_db, app) = spawn_app(false).await;

    let (status, body) = get(&app, "/verify-email?status=success").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("btn btn-primary").count(), 1);
    assert!(body.contains("href=\"/login\""));

    let (_, body) = get(&app, "/verify-email?status=expired").await;
    assert!(body.contains("action=\"/verify-email/resend\""));
    assert!(!body.contains("Email Verified"));
    assert!(!body.contains("Invalid Verification Link"));

    let (_, body) = get(&app, "/verify-email?status=whatever").await;
    assert!(body.contains("Invalid Verification Link"));

    let (_, body) = get(&app, "/verify-email").await;
    assert!(body.contains("Check Your Email"));
}

#[tokio::test]
async fn test_unknown_path_renders_404_page() {
    let (_db, app) = spawn_app(false).await;
    let (status, body) = get(&app, "/no/such/page").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page Not Found"));
    assert!(body.contains("</html>"));
}

#[tokio::test]
async fn test_health_metrics_and_assets() {
    let (_db, app) = spawn_app(false).await;

    let (status, body) = get(&app, "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");

    let (status, body) = get(&app, "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Metrics not enabled"));

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/assets/css/site.css?v=0.1.0")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        mime::TEXT_CSS.as_ref()
    );
    assert_eq!(
        response.headers().get("x-content-type-options").unwrap(),
        "nosniff"
    );

    let (status, _) = get(&app, "/assets/missing.css").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_database_file_removed_with_guard() {
    let (dir, shared) = spawn_state(false).await;
    let db_path = dir.path().join("directory.db");
    assert!(db_path.exists());

    drop(shared);
    drop(dir);
    assert!(!db_path.exists());
}
