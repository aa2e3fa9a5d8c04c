use serde::Deserialize;
use std::collections::HashMap;

/// Read-only lookup from an image's `data-cdn-key` to its CDN URL.
///
/// Built once from configuration; images without an entry keep their
/// placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct CdnImages {
    urls: HashMap<String, String>,
}

impl CdnImages {
    pub fn new(urls: HashMap<String, String>) -> Self {
        Self { urls }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn resolve(&self, key: &str) -> Option<&str> {
        self.urls
            .get(key)
            .map(String::as_str)
            .filter(|url| !url.is_empty())
    }

    /// The CDN URL for `key`, or `placeholder` when none is configured
    pub fn source_for<'a>(&'a self, key: &str, placeholder: &'a str) -> &'a str {
        self.resolve(key).unwrap_or(placeholder)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}
