//! Tumblr API - HTTP client for the legacy Tumblr v1 API.
//!
//! This crate provides a typed client covering all ten actions of the v1
//! API. It resolves each action to its public (per-blog) or private
//! (shared-host) endpoint, overlays the account credentials on
//! authenticated calls, performs the form-encoded HTTP round trip, and
//! normalizes the reply into one generic structure whether the server
//! answered with var-wrapped JSON or with XML.

pub mod action;
pub mod client;
pub mod endpoint;
pub mod endpoints;
pub mod params;
pub mod response;
pub mod xml;

// Re-export key types
pub use action::{Action, ActionKind};
pub use client::TumblrClient;
pub use endpoint::Endpoints;
pub use params::{Params, PostFilter, PostType};
pub use response::ApiResponse;
