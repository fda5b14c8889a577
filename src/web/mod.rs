//! Web server for the ZAHEFO site.
//!
//! Serves the server-rendered pages, the embedded static assets and a small
//! JSON API over the same read-only content.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/organization` - Organization profile
//! - `GET /api/services` - Service catalog
//! - `GET /api/services/{slug}` - One service
//! - `GET /api/sites` - Heritage sites (optional `?category=&status=&q=&unesco=`)
//! - `GET /api/sites/{id}` - One heritage site
//! - `GET /api/testimonials` - Testimonials
//! - `POST /api/contact` - Submit the contact form
//!
//! Pages are listed in [`crate::sections::Section`]; see [`pages`].

pub mod pages;
pub mod static_files;

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::contact::{
    ContactField, ContactFormSubmission, ContactSubmitter, ContactValidator, SimulatedSubmitter,
    SubmitError,
};
use crate::content::Content;
use crate::directory::{Facets, SiteFilter};
use crate::models::{HeritageSite, OrganizationProfile, Service, Testimonial};
use crate::sections::Section;

// ============================================================================
// Application State
// ============================================================================

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Site configuration
    config: Arc<Config>,
    /// Fixture content (immutable after load)
    content: Arc<Content>,
    /// Where contact submissions go
    submitter: Arc<dyn ContactSubmitter>,
}

impl AppState {
    /// Creates the state with the simulated contact submitter.
    #[must_use]
    pub fn new(config: Config, content: Content) -> Self {
        let validator = ContactValidator::new(content.contact_service_options());
        let delay = Duration::from_millis(config.contact.simulated_delay_ms);
        let submitter = Arc::new(SimulatedSubmitter::new(validator, delay));
        Self::with_submitter(config, content, submitter)
    }

    /// Creates the state with a custom contact submitter.
    #[must_use]
    pub fn with_submitter(
        config: Config,
        content: Content,
        submitter: Arc<dyn ContactSubmitter>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            content: Arc::new(content),
            submitter,
        }
    }

    /// Returns the loaded content.
    #[must_use]
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Query parameters shared by the gallery page and the sites API.
#[derive(Debug, Default, Deserialize)]
pub struct SiteQuery {
    /// Category label or "all".
    pub category: Option<String>,
    /// Status label/slug or "all".
    pub status: Option<String>,
    /// Search text.
    pub q: Option<String>,
    /// "1"/"true"/"on" to restrict to UNESCO sites.
    pub unesco: Option<String>,
    /// "grid" or "list" (pages only).
    pub view: Option<String>,
}

impl SiteQuery {
    /// Converts the raw parameters into a filter.
    #[must_use]
    pub fn filter(&self) -> SiteFilter {
        SiteFilter::from_params(
            self.category.as_deref(),
            self.status.as_deref(),
            self.q.as_deref(),
            self.unesco.as_deref(),
        )
    }
}

/// Heritage site list response.
#[derive(Debug, Serialize)]
pub struct SiteListResponse {
    /// Matching sites in fixture order.
    pub sites: Vec<HeritageSite>,
    /// Number of sites before filtering.
    pub total: usize,
    /// Number of matching sites.
    pub shown: usize,
    /// Distinct categories, first-seen order.
    pub categories: Vec<String>,
    /// Distinct status labels, first-seen order.
    pub statuses: Vec<String>,
}

/// Service list response.
#[derive(Debug, Serialize)]
pub struct ServiceListResponse {
    /// All services in catalog order.
    pub services: Vec<Service>,
}

/// Testimonial list response.
#[derive(Debug, Serialize)]
pub struct TestimonialListResponse {
    /// All testimonials.
    pub testimonials: Vec<Testimonial>,
}

/// Accepted contact submission.
#[derive(Debug, Serialize)]
pub struct ContactAcceptedResponse {
    /// Always "accepted".
    pub status: String,
    /// Receipt identifier.
    pub id: Uuid,
    /// Acceptance time.
    pub received_at: DateTime<Utc>,
}

/// Rejected contact submission.
#[derive(Debug, Serialize)]
pub struct ContactRejectedResponse {
    /// Summary message.
    pub error: String,
    /// Message per invalid field.
    pub fields: BTreeMap<ContactField, String>,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/organization - Organization profile.
async fn get_organization(State(state): State<AppState>) -> Json<OrganizationProfile> {
    Json(state.content.organization().clone())
}

/// GET /api/services - Service catalog.
async fn list_services(State(state): State<AppState>) -> Json<ServiceListResponse> {
    Json(ServiceListResponse {
        services: state.content.services().to_vec(),
    })
}

/// GET /api/services/{slug} - One service.
async fn get_service(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Service>, (StatusCode, Json<ApiError>)> {
    state
        .content
        .service(&slug)
        .cloned()
        .map(Json)
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ApiError::new(format!("Service not found: {slug}"))),
            )
        })
}

/// GET /api/sites - Filtered heritage sites.
async fn list_sites(
    State(state): State<AppState>,
    Query(query): Query<SiteQuery>,
) -> Json<SiteListResponse> {
    let all = state.content.heritage_sites();
    let sites: Vec<HeritageSite> = query.filter().apply(all).into_iter().cloned().collect();
    let facets = Facets::from_sites(all);

    Json(SiteListResponse {
        shown: sites.len(),
        total: all.len(),
        sites,
        categories: facets.categories,
        statuses: facets.statuses,
    })
}

/// GET /api/sites/{id} - One heritage site.
async fn get_site(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<HeritageSite>, (StatusCode, Json<ApiError>)> {
    let id: u32 = id.parse().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiError::with_details(
                "Invalid heritage site id",
                format!("'{id}' is not a number"),
            )),
        )
    })?;

    state.content.site(id).cloned().map(Json).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(ApiError::new(format!("Heritage site not found: {id}"))),
        )
    })
}

/// GET /api/testimonials - Testimonials.
async fn list_testimonials(State(state): State<AppState>) -> Json<TestimonialListResponse> {
    Json(TestimonialListResponse {
        testimonials: state.content.testimonials().to_vec(),
    })
}

/// POST /api/contact - Submit the contact form.
async fn submit_contact(
    State(state): State<AppState>,
    Json(submission): Json<ContactFormSubmission>,
) -> Response {
    match state.submitter.submit(submission).await {
        Ok(ack) => (
            StatusCode::ACCEPTED,
            Json(ContactAcceptedResponse {
                status: "accepted".to_string(),
                id: ack.id,
                received_at: ack.received_at,
            }),
        )
            .into_response(),
        Err(SubmitError::Invalid(errors)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ContactRejectedResponse {
                error: "Validation failed".to_string(),
                fields: errors
                    .iter()
                    .map(|(field, message)| (field, message.to_string()))
                    .collect(),
            }),
        )
            .into_response(),
        Err(err @ SubmitError::Unavailable { .. }) => {
            warn!("Contact submission failed: {}", err);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiError::with_details(
                    "Contact service unavailable",
                    err.to_string(),
                )),
            )
                .into_response()
        }
    }
}

// ============================================================================
// Router Setup
// ============================================================================

/// Creates the router with every page, asset and API endpoint.
pub fn create_router(state: AppState) -> Router {
    // Read-only public API; any origin may read it
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Section pages
        .route(Section::Home.path(), get(pages::home_page))
        .route(Section::About.path(), get(pages::about_page))
        .route(Section::Services.path(), get(pages::services_page))
        .route(Section::Heritage.path(), get(pages::heritage_page))
        .route(Section::Impact.path(), get(pages::impact_page))
        .route(
            Section::Contact.path(),
            get(pages::contact_page).post(pages::contact_submit),
        )
        // Detail pages
        .route("/services/{slug}", get(pages::service_page))
        .route("/heritage/sites/{id}", get(pages::site_page))
        // Static assets
        .route("/assets/{*path}", get(static_files::serve_asset))
        // Health check
        .route("/health", get(health_check))
        // Content endpoints
        .route("/api/organization", get(get_organization))
        .route("/api/services", get(list_services))
        .route("/api/services/{slug}", get(get_service))
        .route("/api/sites", get(list_sites))
        .route("/api/sites/{id}", get(get_site))
        .route("/api/testimonials", get(list_testimonials))
        // Contact endpoint
        .route("/api/contact", post(submit_contact))
        .fallback(pages::not_found_page)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server.
///
/// # Arguments
///
/// * `config` - Site configuration
/// * `content` - Loaded fixture content
/// * `addr` - Socket address to bind to
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(config: Config, content: Content, addr: SocketAddr) -> anyhow::Result<()> {
    let state = AppState::new(config, content);
    let app = create_router(state);

    info!("Starting ZAHEFO web server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
