//! ZAHEFO site library.
//!
//! Content, domain logic and web layer of the Zanzibar Heritage Foundation
//! website: the typed fixture data, the heritage-site directory filter, the
//! animated counter model and the contact form validator. The `web` feature
//! adds the axum server that renders the pages and serves the JSON API.

pub mod branding;
pub mod cli;
pub mod config;
pub mod contact;
pub mod content;
pub mod counter;
pub mod directory;
pub mod models;
pub mod sections;

#[cfg(feature = "web")]
pub mod web;
