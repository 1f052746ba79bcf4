//! Crate-wide constants for the v1 API.

/// Shared host serving every authenticated (private) action.
pub const PRIVATE_HOST: &str = "www.tumblr.com";

/// Domain suffix for per-blog public hosts (`<name>.tumblr.com`).
pub const PUBLIC_DOMAIN: &str = "tumblr.com";

/// URL scheme used by the v1 hosts.
pub const SCHEME: &str = "http";

/// Path prefix shared by every endpoint.
pub const API_PREFIX: &str = "api";

/// Path suffix selecting the JSON response variant where supported.
pub const JSON_SUFFIX: &str = "/json";

/// Default API request timeout in milliseconds.
pub const DEFAULT_API_TIMEOUT_MS: u64 = 30_000;

/// Form field names carrying the credential overlay.
pub mod auth_fields {
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
}

/// Wire parameter names shared by several actions.
pub mod param_keys {
    pub const POST_ID: &str = "post-id";
    pub const REBLOG_KEY: &str = "reblog-key";
}
