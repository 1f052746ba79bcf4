//! Posting endpoints: creating, editing, deleting, and reblogging posts.

use tumblr_core::constants::param_keys;
use tumblr_core::error::TumblrResult;

use crate::action::Action;
use crate::client::TumblrClient;
use crate::params::Params;
use crate::response::ApiResponse;

/// Markup format of authored content (wire key `format`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostFormat {
    Html,
    Markdown,
}

impl PostFormat {
    /// Convert to the wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Markdown => "markdown",
        }
    }
}

/// Target type when reblogging as a different format than the original
/// post (wire key `as`). Only these three are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReblogAs {
    Text,
    Link,
    Quote,
}

impl ReblogAs {
    /// Convert to the wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Link => "link",
            Self::Quote => "quote",
        }
    }
}

/// Options for the `reblog` action.
#[derive(Debug, Clone, Default)]
pub struct ReblogOptions {
    /// Commentary added below the reblogged content. Up to 2000 UTF-8
    /// characters; ignored for chat posts.
    pub comment: Option<String>,
    /// Reblog as a different post type (wire key `as`).
    pub reblog_as: Option<ReblogAs>,
    /// Markup format of the comment.
    pub format: Option<PostFormat>,
    /// Post the reblog to a secondary blog, e.g. `mygroup.tumblr.com`.
    pub group: Option<String>,
}

impl ReblogOptions {
    fn to_params(&self) -> Params {
        Params::new()
            .set_opt("comment", self.comment.clone())
            .set_opt("as", self.reblog_as.map(|r| r.as_str()))
            .set_opt("format", self.format.map(|f| f.as_str()))
            .set_opt("group", self.group.clone())
    }
}

impl TumblrClient {
    /// Create a post (`write`).
    ///
    /// Content fields vary by post type (`type`, `title`, `body`, `quote`,
    /// `source`, `tags`, `format`, `state`, ...) so they stay an open
    /// parameter map, forwarded as given. Authenticated POST.
    pub async fn write(&self, params: &Params) -> TumblrResult<ApiResponse> {
        let url = self.endpoints().url_for(Action::Write, false);
        self.post(&url, &params.with_credentials(self.credentials()))
            .await
    }

    /// Edit an existing post (`write` with `post-id` set).
    ///
    /// The given id replaces any `post-id` already in the map.
    pub async fn update(&self, post_id: &str, params: &Params) -> TumblrResult<ApiResponse> {
        let params = params.clone().set(param_keys::POST_ID, post_id);
        self.write(&params).await
    }

    /// Delete a post (`delete`).
    pub async fn delete(&self, post_id: &str) -> TumblrResult<ApiResponse> {
        let url = self.endpoints().url_for(Action::Delete, false);
        let params = Params::new()
            .set(param_keys::POST_ID, post_id)
            .with_credentials(self.credentials());
        self.post(&url, &params).await
    }

    /// Reblog a post (`reblog`).
    pub async fn reblog(
        &self,
        post_id: &str,
        reblog_key: &str,
        options: &ReblogOptions,
    ) -> TumblrResult<ApiResponse> {
        let url = self.endpoints().url_for(Action::Reblog, false);
        let params = Params::new()
            .set(param_keys::POST_ID, post_id)
            .set(param_keys::REBLOG_KEY, reblog_key)
            .merge(&options.to_params())
            .with_credentials(self.credentials());
        self.post(&url, &params).await
    }
}
