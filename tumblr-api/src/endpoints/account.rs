//! Account endpoint.

use tumblr_core::error::TumblrResult;

use crate::action::Action;
use crate::client::TumblrClient;
use crate::params::Params;
use crate::response::ApiResponse;

impl TumblrClient {
    /// Verify the account credentials (`authenticate`).
    ///
    /// Authenticated POST carrying only the credential fields. A success
    /// response also lists the account's blogs.
    pub async fn authenticate(&self) -> TumblrResult<ApiResponse> {
        let url = self.endpoints().url_for(Action::Authenticate, false);
        let params = Params::new().with_credentials(self.credentials());
        self.post(&url, &params).await
    }
}
