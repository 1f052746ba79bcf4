//! Request parameters and the credential overlay.
//!
//! The v1 API takes `application/x-www-form-urlencoded` parameters. This
//! module provides the ordered string map they are assembled in, plus the
//! small shared vocabularies (post type, content filter) used by several
//! actions' typed options.

use std::collections::BTreeMap;

use serde::Serialize;

use tumblr_core::config::Credentials;
use tumblr_core::constants::auth_fields;

/// Ordered string map of form parameters.
///
/// Keys are sorted, so a given parameter set always serializes to the same
/// form body. Merge operations return new maps; an assembled map is never
/// mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    /// An empty parameter map.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Set a parameter, replacing any existing value for the key.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Set a parameter only when a value is present.
    pub fn set_opt(self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.set(key, v),
            None => self,
        }
    }

    /// Look up a parameter value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map holds no parameters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// New map with `other`'s entries overlaid on this one. On key
    /// collision `other` wins.
    pub fn merge(&self, other: &Params) -> Params {
        let mut merged = self.0.clone();
        for (key, value) in &other.0 {
            merged.insert(key.clone(), value.clone());
        }
        Params(merged)
    }

    /// New map with the `email`/`password` fields overlaid. On key
    /// collision the credential values win.
    pub fn with_credentials(&self, credentials: &Credentials) -> Params {
        let mut merged = self.0.clone();
        merged.insert(
            auth_fields::EMAIL.to_string(),
            credentials.email().to_string(),
        );
        merged.insert(
            auth_fields::PASSWORD.to_string(),
            credentials.password().to_string(),
        );
        Params(merged)
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Post type filter accepted by the reading actions (wire key `type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostType {
    Text,
    Quote,
    Photo,
    Link,
    Chat,
    Video,
    Audio,
}

impl PostType {
    /// Convert to the wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Quote => "quote",
            Self::Photo => "photo",
            Self::Link => "link",
            Self::Chat => "chat",
            Self::Video => "video",
            Self::Audio => "audio",
        }
    }
}

/// Content filter accepted by the reading actions (wire key `filter`).
///
/// `Text` strips HTML from returned content; `None` returns it untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostFilter {
    Text,
    None,
}

impl PostFilter {
    /// Convert to the wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::None => "none",
        }
    }
}
