//! In-memory link storage.

use std::{collections::HashMap, sync::Mutex};

use chrono::{DateTime, Utc};
use thiserror::Error;

use httpresults_results::RedirectPermanent;

/// A stored short link. The target was validated when the link was saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub slug: String,
    pub redirect: RedirectPermanent,
    pub retired_at: Option<DateTime<Utc>>,
}

impl Link {
    pub fn is_retired(&self) -> bool {
        self.retired_at.is_some()
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LinkStoreError {
    #[error("link not found: {0}")]
    NotFound(String),

    #[error("link already retired: {0}")]
    AlreadyRetired(String),
}

#[derive(Debug, Default)]
pub struct LinkStore {
    inner: Mutex<HashMap<String, Link>>,
}

impl LinkStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slug: &str) -> Option<Link> {
        self.inner.lock().unwrap().get(slug).cloned()
    }

    /// Save `redirect` under `slug`, reactivating a retired link.
    ///
    /// Returns `true` when the slug was not stored before.
    pub fn upsert(&self, slug: &str, redirect: RedirectPermanent) -> bool {
        let link = Link {
            slug: slug.to_string(),
            redirect,
            retired_at: None,
        };
        self.inner
            .lock()
            .unwrap()
            .insert(slug.to_string(), link)
            .is_none()
    }

    pub fn retire(&self, slug: &str, at: DateTime<Utc>) -> Result<Link, LinkStoreError> {
        let mut inner = self.inner.lock().unwrap();
        let link = inner
            .get_mut(slug)
            .ok_or_else(|| LinkStoreError::NotFound(slug.to_string()))?;

        if link.is_retired() {
            return Err(LinkStoreError::AlreadyRetired(slug.to_string()));
        }

        link.retired_at = Some(at);
        Ok(link.clone())
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
