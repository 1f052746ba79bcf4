//! Dashboard endpoint.

use tumblr_core::error::TumblrResult;

use crate::action::Action;
use crate::client::TumblrClient;
use crate::params::{Params, PostFilter, PostType};
use crate::response::ApiResponse;

/// Options for the `dashboard` action.
///
/// `start`, `num`, `kind`, and `filter` behave as in `read`; the maximum
/// `start` is 250 and the maximum `num` is 51.
#[derive(Debug, Clone, Default)]
pub struct DashboardOptions {
    /// Post offset to start from.
    pub start: Option<u32>,
    /// Number of posts to return.
    pub num: Option<u32>,
    /// Restrict to one post type (wire key `type`).
    pub kind: Option<PostType>,
    /// Alternate filter to run on the text content.
    pub filter: Option<PostFilter>,
    /// Include like metadata on returned posts. Defaults to on.
    pub likes: Option<bool>,
    /// Ask for the JSON response variant instead of XML.
    pub json: bool,
}

impl DashboardOptions {
    fn to_params(&self) -> Params {
        let likes = self.likes.unwrap_or(true);
        Params::new()
            .set_opt("start", self.start.map(|v| v.to_string()))
            .set_opt("num", self.num.map(|v| v.to_string()))
            .set_opt("type", self.kind.map(|k| k.as_str()))
            .set_opt("filter", self.filter.map(|f| f.as_str()))
            .set("likes", if likes { "1" } else { "0" })
    }
}

impl TumblrClient {
    /// Fetch the account's dashboard feed (`dashboard`).
    ///
    /// Always an authenticated POST.
    pub async fn dashboard(&self, options: &DashboardOptions) -> TumblrResult<ApiResponse> {
        let url = self.endpoints().url_for(Action::Dashboard, options.json);
        let params = options.to_params().with_credentials(self.credentials());
        self.post(&url, &params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_likes_defaults_on() {
        let params = DashboardOptions::default().to_params();
        assert_eq!(params.get("likes"), Some("1"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_likes_override() {
        let options = DashboardOptions {
            likes: Some(false),
            ..Default::default()
        };
        assert_eq!(options.to_params().get("likes"), Some("0"));

        let options = DashboardOptions {
            likes: Some(true),
            ..Default::default()
        };
        assert_eq!(options.to_params().get("likes"), Some("1"));
    }

    #[test]
    fn test_wire_keys() {
        let options = DashboardOptions {
            start: Some(200),
            num: Some(51),
            kind: Some(PostType::Quote),
            filter: Some(PostFilter::None),
            ..Default::default()
        };
        let params = options.to_params();
        assert_eq!(params.get("start"), Some("200"));
        assert_eq!(params.get("num"), Some("51"));
        assert_eq!(params.get("type"), Some("quote"));
        assert_eq!(params.get("filter"), Some("none"));
        assert_eq!(params.get("likes"), Some("1"));
    }
}
