//! Response capture and normalization.
//!
//! Every call returns an [`ApiResponse`] holding the raw transport outcome.
//! Success is status 200 exactly; anything else is a failure, body included.
//! `normalize` turns the body into a generic structure regardless of which
//! of the two wire encodings the server picked.

use lazy_static::lazy_static;
use regex::Regex;

use tumblr_core::error::{TumblrError, TumblrResult};

use crate::xml;

lazy_static! {
    // JSON endpoints wrap the payload in a JavaScript assignment:
    // `var tumblr_api_read = {...};`
    static ref JSON_WRAPPER: Regex =
        Regex::new(r"(?s)\A\s*var\s+\w+\s*=\s*(.+);\s*\z").unwrap();
}

/// Status and body of one completed API round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw body text, captured for any status.
    pub body: String,
}

impl ApiResponse {
    /// Whether the call succeeded (status 200 exactly).
    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    /// Whether the call failed. Exact complement of [`is_success`].
    ///
    /// [`is_success`]: Self::is_success
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Decode the body into a generic structure.
    ///
    /// A body matching the `var <identifier> = <payload>;` wrapper is
    /// decoded as JSON (native JSON types preserved); anything else is
    /// parsed as XML and folded into maps, arrays, and strings. A body
    /// that is neither is a [`TumblrError::MalformedResponse`].
    pub fn normalize(&self) -> TumblrResult<serde_json::Value> {
        if let Some(captures) = JSON_WRAPPER.captures(&self.body) {
            serde_json::from_str(&captures[1])
                .map_err(|e| TumblrError::MalformedResponse(format!("invalid JSON payload: {e}")))
        } else {
            xml::parse(&self.body)
        }
    }
}
