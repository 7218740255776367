/// TVMaze catalog implementation.
use super::tvmaze_types::{TvMazeEpisode, TvMazeSearchResult};
use super::{CatalogError, Episode, Show, ShowCatalog};
use crate::config::CatalogConfig;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Catalog backed by the TVMaze API.
///
/// Shows are searched through the `/search/shows` endpoint and episode lists
/// are read from `/shows/{id}/episodes`.
pub struct TvMazeCatalog {
    client: reqwest::blocking::Client,
    config: CatalogConfig,
}

impl TvMazeCatalog {
    /// Creates a new TVMaze catalog talking to https://api.tvmaze.com.
    pub fn new() -> Self {
        Self::with_config(CatalogConfig::default())
    }

    /// Creates a catalog using the given configuration.
    pub fn with_config(config: CatalogConfig) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            config,
        }
    }

    /// Performs a GET request and returns the records of the JSON array body.
    fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Vec<Value>, CatalogError> {
        let url = format!("{}{}", self.config.base_url, path);
        debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .map_err(|e| CatalogError::RequestError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} answered with HTTP {}", url, status.as_u16());
            return Err(CatalogError::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        response
            .json()
            .map_err(|e| CatalogError::ParseError(e.to_string()))
    }
}

impl Default for TvMazeCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ShowCatalog for TvMazeCatalog {
    fn search_shows(&self, term: &str) -> Result<Vec<Show>, CatalogError> {
        let records = self.get("/search/shows", &[("q", term)])?;

        let shows: Vec<Show> = keep_valid(parse_search_response(records), "/search/shows")
            .into_iter()
            .map(|result| normalize_show(result, &self.config.default_image))
            .collect();

        debug!("search for {:?} returned {} show(s)", term, shows.len());
        Ok(shows)
    }

    fn fetch_episodes(&self, show_id: u64) -> Result<Vec<Episode>, CatalogError> {
        let path = format!("/shows/{}/episodes", show_id);
        let records = self.get(&path, &[])?;

        let episodes: Vec<Episode> = keep_valid(parse_episodes_response(records), &path)
            .into_iter()
            .map(normalize_episode)
            .collect();

        debug!("show {} has {} episode(s)", show_id, episodes.len());
        Ok(episodes)
    }
}

/// Parses each record of a `/search/shows` response on its own.
pub(super) fn parse_search_response(
    records: Vec<Value>,
) -> Vec<Result<TvMazeSearchResult, CatalogError>> {
    parse_records(records)
}

/// Parses each record of a `/shows/{id}/episodes` response on its own.
pub(super) fn parse_episodes_response(
    records: Vec<Value>,
) -> Vec<Result<TvMazeEpisode, CatalogError>> {
    parse_records(records)
}

fn parse_records<T: DeserializeOwned>(records: Vec<Value>) -> Vec<Result<T, CatalogError>> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            serde_json::from_value(record).map_err(|e| CatalogError::MalformedRecord {
                index,
                reason: e.to_string(),
            })
        })
        .collect()
}

/// Drops malformed records, logging each one, and keeps the rest in order.
fn keep_valid<T>(results: Vec<Result<T, CatalogError>>, endpoint: &str) -> Vec<T> {
    results
        .into_iter()
        .filter_map(|result| match result {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Skipping record from {}: {}", endpoint, e);
                None
            }
        })
        .collect()
}

/// Converts a search result to our Show structure.
///
/// A missing image object, a missing medium URL and an empty URL all fall
/// back to `default_image`.
pub(super) fn normalize_show(result: TvMazeSearchResult, default_image: &str) -> Show {
    let show = result.show;

    let image = show
        .image
        .and_then(|image| image.medium)
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| default_image.to_string());

    Show {
        id: show.id,
        name: show.name,
        summary: show.summary.unwrap_or_default(),
        image,
    }
}

/// Converts a TVMaze episode to our Episode structure.
pub(super) fn normalize_episode(episode: TvMazeEpisode) -> Episode {
    Episode {
        id: episode.id,
        name: episode.name.unwrap_or_default(),
        season: episode.season,
        number: episode.number,
    }
}
