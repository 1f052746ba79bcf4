//! The closed set of v1 API actions and their routing properties.
//!
//! Every endpoint of the legacy API is one of exactly ten actions. Each
//! action belongs to one of two categories deciding which host serves it,
//! and two of the actions additionally offer a JSON response variant.

use std::fmt;
use std::str::FromStr;

use tumblr_core::error::TumblrError;

/// Which host serves an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Served from the per-blog subdomain; no credentials needed.
    Public,
    /// Served from the shared host; credentials required.
    Private,
}

/// All actions exposed by the v1 API.
///
/// These map 1:1 to the `/api/<action>` path segments of the legacy
/// endpoints. The set is closed: unknown names are rejected at the string
/// boundary (`FromStr`) and cannot occur past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Fetch posts from a blog (`read`).
    Read,
    /// Fetch the static pages of a blog (`pages`).
    Pages,
    /// Fetch the account's dashboard feed (`dashboard`).
    Dashboard,
    /// Create a post (`write`).
    Write,
    /// Delete a post (`delete`).
    Delete,
    /// Like a post (`like`).
    Like,
    /// Remove a like from a post (`unlike`).
    Unlike,
    /// Reblog a post (`reblog`).
    Reblog,
    /// Fetch the account's liked posts (`likes`).
    Likes,
    /// Verify credentials (`authenticate`).
    Authenticate,
}

impl Action {
    /// Every action, in wire-name order.
    pub const ALL: [Action; 10] = [
        Action::Read,
        Action::Pages,
        Action::Dashboard,
        Action::Write,
        Action::Delete,
        Action::Like,
        Action::Unlike,
        Action::Reblog,
        Action::Likes,
        Action::Authenticate,
    ];

    /// Convert to the `/api/<action>` path segment.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Pages => "pages",
            Self::Dashboard => "dashboard",
            Self::Write => "write",
            Self::Delete => "delete",
            Self::Like => "like",
            Self::Unlike => "unlike",
            Self::Reblog => "reblog",
            Self::Likes => "likes",
            Self::Authenticate => "authenticate",
        }
    }

    /// Which host category serves this action.
    pub fn kind(&self) -> ActionKind {
        match self {
            Self::Read | Self::Pages => ActionKind::Public,
            Self::Dashboard
            | Self::Write
            | Self::Delete
            | Self::Like
            | Self::Unlike
            | Self::Reblog
            | Self::Likes
            | Self::Authenticate => ActionKind::Private,
        }
    }

    /// Whether this action must carry account credentials.
    pub fn requires_auth(&self) -> bool {
        self.kind() == ActionKind::Private
    }

    /// Whether the endpoint offers the `/json` response variant.
    pub fn supports_json(&self) -> bool {
        matches!(self, Self::Read | Self::Dashboard)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = TumblrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "read" => Ok(Self::Read),
            "pages" => Ok(Self::Pages),
            "dashboard" => Ok(Self::Dashboard),
            "write" => Ok(Self::Write),
            "delete" => Ok(Self::Delete),
            "like" => Ok(Self::Like),
            "unlike" => Ok(Self::Unlike),
            "reblog" => Ok(Self::Reblog),
            "likes" => Ok(Self::Likes),
            "authenticate" => Ok(Self::Authenticate),
            other => Err(TumblrError::InvalidAction(other.to_string())),
        }
    }
}
