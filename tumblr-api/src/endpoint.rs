//! Endpoint URL resolution.
//!
//! Maps an [`Action`] to the concrete URL serving it. Public actions are
//! served from the blog's own subdomain, private actions from the shared
//! host; both roots can be overridden for tests or proxies.

use tracing::warn;

use tumblr_core::config::ClientConfig;
use tumblr_core::constants;

use crate::action::{Action, ActionKind};

/// Resolves actions to endpoint URLs.
#[derive(Debug, Clone)]
pub struct Endpoints {
    /// Root serving the public actions, e.g. `http://example.tumblr.com`.
    public_root: String,
    /// Root serving the private actions, e.g. `http://www.tumblr.com`.
    private_root: String,
}

impl Endpoints {
    /// Build the default endpoints for a blog name.
    pub fn new(blog_name: &str) -> Self {
        Self {
            public_root: format!(
                "{}://{}.{}",
                constants::SCHEME,
                blog_name,
                constants::PUBLIC_DOMAIN
            ),
            private_root: format!("{}://{}", constants::SCHEME, constants::PRIVATE_HOST),
        }
    }

    /// Build endpoints from a client configuration, applying any root
    /// overrides it carries.
    pub fn from_config(config: &ClientConfig) -> Self {
        let mut endpoints = Self::new(&config.name);
        if let Some(ref root) = config.public_root {
            endpoints = endpoints.with_public_root(root);
        }
        if let Some(ref root) = config.private_root {
            endpoints = endpoints.with_private_root(root);
        }
        endpoints
    }

    /// Override the public root (scheme + host, no trailing slash).
    pub fn with_public_root(mut self, root: &str) -> Self {
        self.public_root = root.trim_end_matches('/').to_string();
        self
    }

    /// Override the private root (scheme + host, no trailing slash).
    pub fn with_private_root(mut self, root: &str) -> Self {
        self.private_root = root.trim_end_matches('/').to_string();
        self
    }

    /// The root URL an action is served from.
    pub fn root_for(&self, action: Action) -> &str {
        match action.kind() {
            ActionKind::Public => &self.public_root,
            ActionKind::Private => &self.private_root,
        }
    }

    /// Build the full URL for an action.
    ///
    /// `wants_json` selects the JSON response variant where the endpoint
    /// offers one. Asking for JSON on an ineligible action logs a warning
    /// and resolves to the plain endpoint.
    pub fn url_for(&self, action: Action, wants_json: bool) -> String {
        let mut url = format!(
            "{}/{}/{}",
            self.root_for(action),
            constants::API_PREFIX,
            action.as_str()
        );
        if wants_json {
            if action.supports_json() {
                url.push_str(constants::JSON_SUFFIX);
            } else {
                warn!("{action} action does not accept json");
            }
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_actions_use_blog_subdomain() {
        let endpoints = Endpoints::new("example");
        assert_eq!(
            endpoints.url_for(Action::Read, false),
            "http://example.tumblr.com/api/read"
        );
        assert_eq!(
            endpoints.url_for(Action::Pages, false),
            "http://example.tumblr.com/api/pages"
        );
    }

    #[test]
    fn test_private_actions_use_shared_host() {
        let endpoints = Endpoints::new("example");
        for action in Action::ALL.iter().filter(|a| a.requires_auth()) {
            let url = endpoints.url_for(*action, false);
            assert_eq!(url, format!("http://www.tumblr.com/api/{action}"));
        }
    }

    #[test]
    fn test_json_suffix_only_where_supported() {
        let endpoints = Endpoints::new("example");
        assert_eq!(
            endpoints.url_for(Action::Read, true),
            "http://example.tumblr.com/api/read/json"
        );
        assert_eq!(
            endpoints.url_for(Action::Dashboard, true),
            "http://www.tumblr.com/api/dashboard/json"
        );
        // Ineligible actions resolve to the plain endpoint.
        for action in Action::ALL.iter().filter(|a| !a.supports_json()) {
            assert_eq!(
                endpoints.url_for(*action, true),
                endpoints.url_for(*action, false),
                "{action}"
            );
        }
    }

    #[test]
    fn test_root_overrides_trim_trailing_slash() {
        let endpoints = Endpoints::new("example")
            .with_public_root("http://localhost:9001/")
            .with_private_root("http://localhost:9002");
        assert_eq!(
            endpoints.url_for(Action::Read, false),
            "http://localhost:9001/api/read"
        );
        assert_eq!(
            endpoints.url_for(Action::Write, false),
            "http://localhost:9002/api/write"
        );
    }

    #[test]
    fn test_from_config_applies_overrides() {
        let mut config = ClientConfig::new("a@b.c", "pw", "example");
        config.private_root = Some("http://127.0.0.1:4000".to_string());
        let endpoints = Endpoints::from_config(&config);
        assert_eq!(
            endpoints.url_for(Action::Read, false),
            "http://example.tumblr.com/api/read"
        );
        assert_eq!(
            endpoints.url_for(Action::Authenticate, false),
            "http://127.0.0.1:4000/api/authenticate"
        );
    }
}
