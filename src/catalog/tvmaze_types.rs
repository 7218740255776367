/// TVMaze API response types for deserialization.
///
/// These structures mirror the JSON response format from the TVMaze API.
use serde::Deserialize;

/// A single entry of the `/search/shows` response.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeSearchResult {
    /// The matched show
    pub show: TvMazeShow,
}

/// A show as embedded in a search result.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeShow {
    /// Unique show identifier
    pub id: u64,
    /// The name of the TV show
    pub name: String,
    /// Show summary in HTML format (may be null)
    pub summary: Option<String>,
    /// Image URLs (null if the show has no image)
    pub image: Option<TvMazeImage>,
}

/// Image URLs attached to a show.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeImage {
    /// Medium sized poster URL
    pub medium: Option<String>,
}

/// A single entry of the `/shows/{id}/episodes` response.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeEpisode {
    /// Unique episode identifier
    pub id: u64,
    /// Episode title (may be null for episodes without a title)
    pub name: Option<String>,
    /// Season number
    pub season: u32,
    /// Episode number within the season
    pub number: u32,
}
