//! Embedded static assets (stylesheet, script, favicon).
//!
//! The `assets/` directory is compiled into the binary so the server is a
//! single file to deploy.

use axum::{
    body::Body,
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::Embed;

/// Files under `assets/`, served at `/assets/*`.
#[derive(Embed)]
#[folder = "assets"]
#[include = "*.css"]
#[include = "*.js"]
#[include = "*.svg"]
#[include = "*.png"]
#[include = "*.ico"]
#[include = "*.woff2"]
pub struct SiteAssets;

/// GET /assets/{*path} - Serves one embedded asset.
pub async fn serve_asset(Path(path): Path<String>) -> Response {
    let path = path.trim_start_matches('/');

    match SiteAssets::get(path) {
        Some(content) => file_response(path, content.data.as_ref()),
        None => (StatusCode::NOT_FOUND, "File not found").into_response(),
    }
}

/// Creates an HTTP response for a file with appropriate content type.
fn file_response(path: &str, content: &[u8]) -> Response {
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime.as_ref())
        .header(header::CACHE_CONTROL, cache_control_for_path(path))
        .body(Body::from(content.to_vec()))
        .unwrap_or_else(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create response",
            )
                .into_response()
        })
}

/// Returns the Cache-Control header for an asset.
///
/// Stylesheet and script are not fingerprinted, so they must revalidate;
/// images rarely change and get a day.
fn cache_control_for_path(path: &str) -> &'static str {
    let ext = std::path::Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    match ext.as_str() {
        "css" | "js" => "public, max-age=300, must-revalidate",
        "svg" | "png" | "ico" | "woff2" => "public, max-age=86400",
        _ => "no-cache",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_control_for_path() {
        assert_eq!(
            cache_control_for_path("site.css"),
            "public, max-age=300, must-revalidate"
        );
        assert_eq!(
            cache_control_for_path("SITE.JS"),
            "public, max-age=300, must-revalidate"
        );
        assert_eq!(cache_control_for_path("favicon.svg"), "public, max-age=86400");
        assert_eq!(cache_control_for_path("notes.txt"), "no-cache");
    }

    #[test]
    fn test_assets_are_embedded() {
        for name in ["site.css", "site.js", "favicon.svg"] {
            assert!(SiteAssets::get(name).is_some(), "{name} missing");
        }
    }
}
