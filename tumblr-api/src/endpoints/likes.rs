//! Like endpoints: marking, unmarking, and listing liked posts.

use tumblr_core::constants::param_keys;
use tumblr_core::error::TumblrResult;

use crate::action::Action;
use crate::client::TumblrClient;
use crate::params::{Params, PostFilter};
use crate::response::ApiResponse;

/// Options for the `likes` action.
///
/// `start`, `num`, and `filter` behave as in `read`; the maximum `start`
/// is 1000.
#[derive(Debug, Clone, Default)]
pub struct LikesOptions {
    /// Post offset to start from.
    pub start: Option<u32>,
    /// Number of posts to return.
    pub num: Option<u32>,
    /// Alternate filter to run on the text content.
    pub filter: Option<PostFilter>,
}

impl LikesOptions {
    fn to_params(&self) -> Params {
        Params::new()
            .set_opt("start", self.start.map(|v| v.to_string()))
            .set_opt("num", self.num.map(|v| v.to_string()))
            .set_opt("filter", self.filter.map(|f| f.as_str()))
    }
}

impl TumblrClient {
    /// Like a post (`like`).
    ///
    /// Both identifiers come from the post being liked; the reblog key is
    /// part of every post's metadata.
    pub async fn like(&self, post_id: &str, reblog_key: &str) -> TumblrResult<ApiResponse> {
        let url = self.endpoints().url_for(Action::Like, false);
        let params = Params::new()
            .set(param_keys::POST_ID, post_id)
            .set(param_keys::REBLOG_KEY, reblog_key)
            .with_credentials(self.credentials());
        self.post(&url, &params).await
    }

    /// Remove a like from a post (`unlike`).
    pub async fn unlike(&self, post_id: &str, reblog_key: &str) -> TumblrResult<ApiResponse> {
        let url = self.endpoints().url_for(Action::Unlike, false);
        let params = Params::new()
            .set(param_keys::POST_ID, post_id)
            .set(param_keys::REBLOG_KEY, reblog_key)
            .with_credentials(self.credentials());
        self.post(&url, &params).await
    }

    /// List the account's liked posts (`likes`).
    pub async fn likes(&self, options: &LikesOptions) -> TumblrResult<ApiResponse> {
        let url = self.endpoints().url_for(Action::Likes, false);
        let params = options.to_params().with_credentials(self.credentials());
        self.post(&url, &params).await
    }
}
