/// Data structures and traits for TV show catalog access.
///
/// This module provides the normalized show and episode records used for
/// display, as well as the trait implemented by catalog backends.
mod tvmaze;
mod tvmaze_types;

pub use tvmaze::TvMazeCatalog;

use thiserror::Error;

/// Errors that can occur while talking to the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request could not be sent or the response could not be read
    #[error("Request failed: {0}")]
    RequestError(String),

    /// The catalog answered with a non-success status code
    #[error("HTTP {status} {reason}")]
    HttpStatus { status: u16, reason: String },

    /// The response body was not a JSON array
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// A single record of the response did not have the expected shape
    #[error("Malformed record at index {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },
}

/// A TV show as it is presented in the shows list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Show {
    /// Catalog-assigned identifier, used to request the episodes
    pub id: u64,
    /// The name of the show
    pub name: String,
    /// Summary of the show, may contain HTML markup
    pub summary: String,
    /// URL of the show's image, never empty
    pub image: String,
}

/// A single episode of a show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    /// Catalog-assigned identifier, unique within the show
    pub id: u64,
    /// The episode title
    pub name: String,
    /// The season this episode belongs to
    pub season: u32,
    /// The episode number within the season
    pub number: u32,
}

/// Trait for catalogs that can search shows and list their episodes.
pub trait ShowCatalog {
    /// Searches the catalog for shows matching the given term.
    ///
    /// The term is passed to the catalog unchanged, including the empty
    /// string. Shows are returned in the order the catalog ranked them.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if the request fails, the catalog answers
    /// with a non-success status, or the response cannot be parsed.
    fn search_shows(&self, term: &str) -> Result<Vec<Show>, CatalogError>;

    /// Fetches all episodes of the show with the given identifier.
    ///
    /// Episodes are returned in catalog order, without any re-sorting.
    fn fetch_episodes(&self, show_id: u64) -> Result<Vec<Episode>, CatalogError>;
}
