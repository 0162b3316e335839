use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::app::store::Link;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct PutLinkRequest {
    /// `null` or missing is rejected when the redirect is built.
    #[serde(default)]
    pub target: Option<String>,
}

// -------------------------
// Response DTOs
// -------------------------

/// Body of a 410 for a link that was retired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetiredLink {
    pub slug: String,
    pub target: String,
    pub retired_at: DateTime<Utc>,
}

impl RetiredLink {
    /// `None` for a link that is still active.
    pub fn from_link(link: &Link) -> Option<Self> {
        link.retired_at.map(|retired_at| Self {
            slug: link.slug.clone(),
            target: link.redirect.uri().to_string(),
            retired_at,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

impl ErrorBody {
    pub fn new(error: &str, message: impl Into<String>) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
        }
    }
}
