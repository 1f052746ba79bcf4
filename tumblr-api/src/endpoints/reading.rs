//! Reading endpoints: blog posts and static pages.

use tumblr_core::error::TumblrResult;

use crate::action::Action;
use crate::client::TumblrClient;
use crate::params::{Params, PostFilter, PostType};
use crate::response::ApiResponse;

/// Publication state filter for authenticated reads (wire key `state`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostState {
    Draft,
    Queue,
    Submission,
}

impl PostState {
    /// Convert to the wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Queue => "queue",
            Self::Submission => "submission",
        }
    }
}

/// Options for the `read` action.
///
/// The most recent 20 posts are returned by default; the server caps `num`
/// at 50.
#[derive(Debug, Clone, Default)]
pub struct ReadOptions {
    /// Post offset to start from.
    pub start: Option<u32>,
    /// Number of posts to return.
    pub num: Option<u32>,
    /// Restrict to one post type (wire key `type`).
    pub kind: Option<PostType>,
    /// Fetch a specific post by id, instead of `start`/`num`/`kind`.
    pub id: Option<u64>,
    /// Alternate filter to run on the text content.
    pub filter: Option<PostFilter>,
    /// Return posts carrying this tag, newest first.
    pub tagged: Option<String>,
    /// With `tagged`, sort oldest first instead (wire key `chrono`).
    pub chronological: bool,
    /// Search for posts with this query.
    pub search: Option<String>,
    /// List posts in this state; needs an authenticated read.
    pub state: Option<PostState>,
    /// Ask for the JSON response variant instead of XML.
    pub json: bool,
}

impl ReadOptions {
    /// Render the wire parameters. The `json` flag routes to the endpoint
    /// resolver and never appears here.
    fn to_params(&self) -> Params {
        Params::new()
            .set_opt("start", self.start.map(|v| v.to_string()))
            .set_opt("num", self.num.map(|v| v.to_string()))
            .set_opt("type", self.kind.map(|k| k.as_str()))
            .set_opt("id", self.id.map(|v| v.to_string()))
            .set_opt("filter", self.filter.map(|f| f.as_str()))
            .set_opt("tagged", self.tagged.clone())
            .set_opt("chrono", self.chronological.then_some("1"))
            .set_opt("search", self.search.clone())
            .set_opt("state", self.state.map(|s| s.as_str()))
    }
}

impl TumblrClient {
    /// Fetch posts from the blog (`read`).
    ///
    /// With every option unset this is an unauthenticated GET against the
    /// public endpoint. Setting any option (including `json` alone) turns
    /// the call into an authenticated POST, which is also what grants
    /// access to the draft/queue/submission states.
    pub async fn read(&self, options: &ReadOptions) -> TumblrResult<ApiResponse> {
        let url = self.endpoints().url_for(Action::Read, options.json);
        let params = options.to_params();
        if params.is_empty() && !options.json {
            self.get(&url).await
        } else {
            self.post(&url, &params.with_credentials(self.credentials()))
                .await
        }
    }

    /// Fetch the blog's static pages (`pages`).
    ///
    /// With an empty parameter map this is an unauthenticated GET; any
    /// parameter switches the call to an authenticated POST with the
    /// parameters forwarded.
    pub async fn pages(&self, params: &Params) -> TumblrResult<ApiResponse> {
        let url = self.endpoints().url_for(Action::Pages, false);
        if params.is_empty() {
            self.get(&url).await
        } else {
            self.post(&url, &params.with_credentials(self.credentials()))
                .await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_render_nothing() {
        assert!(ReadOptions::default().to_params().is_empty());
    }

    #[test]
    fn test_wire_keys() {
        let options = ReadOptions {
            start: Some(10),
            num: Some(50),
            kind: Some(PostType::Photo),
            filter: Some(PostFilter::Text),
            tagged: Some("rust".to_string()),
            chronological: true,
            search: Some("ferris".to_string()),
            state: Some(PostState::Draft),
            ..Default::default()
        };
        let params = options.to_params();
        assert_eq!(params.get("start"), Some("10"));
        assert_eq!(params.get("num"), Some("50"));
        assert_eq!(params.get("type"), Some("photo"));
        assert_eq!(params.get("filter"), Some("text"));
        assert_eq!(params.get("tagged"), Some("rust"));
        assert_eq!(params.get("chrono"), Some("1"));
        assert_eq!(params.get("search"), Some("ferris"));
        assert_eq!(params.get("state"), Some("draft"));
        assert!(params.get("id").is_none());
    }

    #[test]
    fn test_chrono_is_omitted_unless_set() {
        let options = ReadOptions {
            tagged: Some("rust".to_string()),
            ..Default::default()
        };
        assert!(options.to_params().get("chrono").is_none());
    }

    #[test]
    fn test_json_flag_is_not_a_wire_parameter() {
        let options = ReadOptions {
            json: true,
            ..Default::default()
        };
        assert!(options.to_params().is_empty());
    }

    #[test]
    fn test_id_renders_alone() {
        let options = ReadOptions {
            id: Some(123456),
            ..Default::default()
        };
        let params = options.to_params();
        assert_eq!(params.get("id"), Some("123456"));
        assert_eq!(params.len(), 1);
    }
}
