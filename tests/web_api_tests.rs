//! Integration tests for the ZAHEFO JSON API.
//!
//! These tests require the `web` feature to be enabled:
//! ```bash
//! cargo test --features web web_api
//! ```

#![cfg(feature = "web")]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use zahefo::config::Config;
use zahefo::contact::{Ack, ContactFormSubmission, ContactSubmitter, SubmitError};
use zahefo::content::Content;
use zahefo::web::{create_router, AppState};

mod fixtures;
use fixtures::{content_dir_with_sites, site_json, valid_submission};

/// Creates a test AppState over the embedded content with no submit delay.
fn create_test_state() -> AppState {
    let mut config = Config::default();
    config.contact.simulated_delay_ms = 0;
    let content = Content::load_embedded().expect("Failed to load embedded content");
    AppState::new(config, content)
}

async fn get(state: AppState, uri: &str) -> (StatusCode, Value) {
    let response = create_router(state)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

async fn post_contact(state: AppState, body: &Value) -> (StatusCode, Value) {
    let response = create_router(state)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/contact")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

fn names(json: &Value) -> Vec<String> {
    json["sites"]
        .as_array()
        .unwrap()
        .iter()
        .map(|site| site["name"].as_str().unwrap().to_string())
        .collect()
}

// ============================================================================
// Health and catalog
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let (status, json) = get(create_test_state(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_organization_profile() {
    let (status, json) = get(create_test_state(), "/api/organization").await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["name"].as_str().unwrap().contains("Zanzibar"));
    assert_eq!(json["stats"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_list_services() {
    let (status, json) = get(create_test_state(), "/api/services").await;

    assert_eq!(status, StatusCode::OK);
    let slugs: Vec<&str> = json["services"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["slug"].as_str().unwrap())
        .collect();
    assert_eq!(
        slugs,
        vec![
            "records-management",
            "heritage-management",
            "training-programs"
        ]
    );
}

#[tokio::test]
async fn test_get_service_not_found() {
    let (status, json) = get(create_test_state(), "/api/services/catering").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Service not found: catering");
}

#[tokio::test]
async fn test_list_testimonials() {
    let (status, json) = get(create_test_state(), "/api/testimonials").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["testimonials"].as_array().unwrap().len(), 3);
}

// ============================================================================
// Heritage sites
// ============================================================================

#[tokio::test]
async fn test_list_sites_unfiltered() {
    let (status, json) = get(create_test_state(), "/api/sites").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 6);
    assert_eq!(json["shown"], 6);
    assert_eq!(names(&json)[0], "Old Fort (Ngome Kongwe)");
    assert_eq!(json["categories"].as_array().unwrap().len(), 6);
    assert_eq!(
        json["statuses"],
        serde_json::json!(["Preserved", "Under Restoration", "Active Heritage Area", "Active"])
    );
}

#[tokio::test]
async fn test_list_sites_by_status_slug() {
    let (_, json) = get(create_test_state(), "/api/sites?status=preserved").await;

    assert_eq!(json["shown"], 3);
    assert_eq!(json["total"], 6);
    assert_eq!(
        names(&json),
        vec![
            "Old Fort (Ngome Kongwe)",
            "Traditional Zanzibar Doors",
            "Old Dispensary"
        ]
    );
}

#[tokio::test]
async fn test_list_sites_combined_clauses() {
    let (_, json) = get(
        create_test_state(),
        "/api/sites?category=all&status=Preserved&unesco=1",
    )
    .await;

    assert_eq!(names(&json), vec!["Old Fort (Ngome Kongwe)"]);
}

#[tokio::test]
async fn test_list_sites_query_is_case_insensitive() {
    let (_, json) = get(create_test_state(), "/api/sites?q=STONE%20TOWN").await;

    // Matches on name or description
    let found = names(&json);
    assert!(found.contains(&"Stone Town Historic Center".to_string()));
    assert!(found.contains(&"Old Fort (Ngome Kongwe)".to_string()));
}

#[tokio::test]
async fn test_list_sites_no_match_is_empty_not_error() {
    let (status, json) = get(create_test_state(), "/api/sites?q=atlantis").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["shown"], 0);
    assert_eq!(json["total"], 6);
    assert!(json["sites"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_get_site() {
    let (status, json) = get(create_test_state(), "/api/sites/2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "House of Wonders (Beit-al-Ajaib)");
    assert_eq!(json["status"], "Under Restoration");
}

#[tokio::test]
async fn test_get_site_errors() {
    let (status, json) = get(create_test_state(), "/api/sites/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Heritage site not found: 99");

    let (status, json) = get(create_test_state(), "/api/sites/fort").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid heritage site id");
}

#[tokio::test]
async fn test_sites_from_content_dir() {
    let dir = content_dir_with_sites(&[
        site_json(10, "Mangapwani Slave Chamber", "Historic Site", "Preserved", false),
        site_json(11, "Maruhubi Palace Ruins", "Palace", "Under Restoration", false),
    ]);
    let content = Content::load_from_dir(dir.path()).unwrap();
    let state = AppState::new(Config::default(), content);

    let (_, json) = get(state, "/api/sites?category=Palace").await;

    assert_eq!(json["total"], 2);
    assert_eq!(names(&json), vec!["Maruhubi Palace Ruins"]);
}

// ============================================================================
// Contact
// ============================================================================

#[tokio::test]
async fn test_contact_accepted() {
    let body = serde_json::to_value(valid_submission()).unwrap();
    let (status, json) = post_contact(create_test_state(), &body).await;

    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(json["status"], "accepted");
    assert_eq!(json["id"].as_str().unwrap().len(), 36);
    assert!(json["received_at"].is_string());
}

#[tokio::test]
async fn test_contact_rejected_lists_every_field() {
    let body = serde_json::json!({
        "name": "A",
        "email": "not-an-email",
        "subject": "Hi",
        "message": "Too short"
    });
    let (status, json) = post_contact(create_test_state(), &body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error"], "Validation failed");
    let fields = json["fields"].as_object().unwrap();
    assert_eq!(fields.len(), 4);
    assert_eq!(fields["name"], "Name must be at least 2 characters long");
    assert_eq!(fields["email"], "Please enter a valid email address");
    assert_eq!(fields["subject"], "Subject must be at least 3 characters long");
    assert_eq!(fields["message"], "Message must be at least 10 characters long");
}

#[tokio::test]
async fn test_contact_short_name_is_fine() {
    let body = serde_json::json!({
        "name": "Jo",
        "email": "bad",
        "subject": "Hi",
        "message": "short"
    });
    let (status, json) = post_contact(create_test_state(), &body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let fields = json["fields"].as_object().unwrap();
    let mut keys: Vec<&str> = fields.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["email", "message", "subject"]);
}

#[tokio::test]
async fn test_contact_rejects_unknown_service() {
    let mut submission = valid_submission();
    submission.service = Some("Catering".to_string());
    let body = serde_json::to_value(submission).unwrap();

    let (status, json) = post_contact(create_test_state(), &body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json["fields"]["service"].is_string());
}

struct DownSubmitter;

#[async_trait]
impl ContactSubmitter for DownSubmitter {
    async fn submit(&self, _submission: ContactFormSubmission) -> Result<Ack, SubmitError> {
        Err(SubmitError::Unavailable {
            message: "mail relay offline".to_string(),
        })
    }
}

#[tokio::test]
async fn test_contact_unavailable() {
    let content = Content::load_embedded().unwrap();
    let state = AppState::with_submitter(Config::default(), content, Arc::new(DownSubmitter));
    let body = serde_json::to_value(valid_submission()).unwrap();

    let (status, json) = post_contact(state, &body).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["error"], "Contact service unavailable");
}
