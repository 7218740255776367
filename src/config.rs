//! Catalog configuration
//!
//! Holds the upstream endpoint and the placeholder image used for shows
//! without artwork.

/// Base URL of the public TVMaze API
pub const DEFAULT_BASE_URL: &str = "https://api.tvmaze.com";

/// Image shown for shows that have no image in the catalog
pub const DEFAULT_IMAGE_URL: &str = "http://tinyurl.com/tv-missing";

/// Settings for a catalog backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Base URL the endpoint paths are appended to, without trailing slash
    pub base_url: String,
    /// Substitute image URL for shows without one
    pub default_image: String,
}

impl CatalogConfig {
    /// Creates a configuration for the given base URL and placeholder image.
    ///
    /// Trailing slashes are stripped from `base_url` so endpoint paths can be
    /// appended directly.
    pub fn new(base_url: impl Into<String>, default_image: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            default_image: default_image.into(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_IMAGE_URL)
    }
}
