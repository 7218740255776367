//! ShowScout - Search the TVMaze catalog and browse episode lists
//!
//! This library provides the core functionality for searching tv shows,
//! normalizing the catalog's responses and rendering them as show cards and
//! episode lists.

mod catalog;
mod config;
pub mod handlers;
mod render;

pub use catalog::{CatalogError, Episode, Show, ShowCatalog, TvMazeCatalog};
pub use config::{CatalogConfig, DEFAULT_BASE_URL, DEFAULT_IMAGE_URL};
pub use render::{
    EpisodesArea, EpisodesTrigger, Page, RenderError, ShowCard, ShowsList, format_episode_line,
    populate_episodes, populate_shows,
};

use handlers::{Command, apply, handle_command};
use thiserror::Error;

/// Progress event emitted while talking to the catalog
///
/// These events allow library users to report what is going on, or to
/// remain silent.
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// A search request is about to be sent
    Searching { term: String },

    /// The search returned
    ShowsFound { term: String, count: usize },

    /// An episode list request is about to be sent
    FetchingEpisodes { show_id: u64 },

    /// The episode list returned
    EpisodesFound { show_id: u64, count: usize },
}

/// Top-level error type for ShowScout operations
#[derive(Debug, Error)]
pub enum ShowScoutError {
    /// Error while talking to the catalog
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Error while rendering markup
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// The "Episodes" trigger does not belong to any displayed show
    #[error("No show card at position {0}")]
    UnknownTrigger(usize),
}

/// Searches for shows and displays them on the page
///
/// The episodes area is hidden and the shows list is replaced by the search
/// results. An empty result leaves the shows list empty.
///
/// # Examples
///
/// ```no_run
/// use show_scout::{Page, TvMazeCatalog, search_for_show_and_display};
///
/// let catalog = TvMazeCatalog::new();
/// let mut page = Page::new();
///
/// search_for_show_and_display(&catalog, &mut page, "batman", |_| {}).unwrap();
/// println!("{}", page.to_text());
/// ```
pub fn search_for_show_and_display<C, F>(
    catalog: &C,
    page: &mut Page,
    term: &str,
    mut progress_callback: F,
) -> Result<(), ShowScoutError>
where
    C: ShowCatalog + ?Sized,
    F: FnMut(ProgressEvent),
{
    progress_callback(ProgressEvent::Searching {
        term: term.to_string(),
    });

    let instruction = handle_command(
        catalog,
        Command::Search {
            term: term.to_string(),
        },
    )?;
    apply(page, instruction);

    progress_callback(ProgressEvent::ShowsFound {
        term: term.to_string(),
        count: page.shows_list.cards().len(),
    });

    Ok(())
}

/// Fetches the episodes of the show whose "Episodes" control was triggered
///
/// The previous episode list is replaced and the episodes area is revealed.
///
/// # Errors
///
/// Returns `ShowScoutError::UnknownTrigger` if the trigger does not belong to
/// a displayed show card, and propagates catalog errors unchanged.
pub fn get_episodes_and_display<C, F>(
    catalog: &C,
    page: &mut Page,
    trigger: EpisodesTrigger,
    progress_callback: F,
) -> Result<(), ShowScoutError>
where
    C: ShowCatalog + ?Sized,
    F: FnMut(ProgressEvent),
{
    let show_id = page
        .shows_list
        .closest_show_id(trigger)
        .ok_or(ShowScoutError::UnknownTrigger(trigger.card))?;

    fetch_episodes_and_display(catalog, page, show_id, progress_callback)
}

/// Fetches the episodes of the given show and displays them on the page
///
/// The previous episode list is replaced and the episodes area is revealed.
/// The shows list is left untouched.
pub fn fetch_episodes_and_display<C, F>(
    catalog: &C,
    page: &mut Page,
    show_id: u64,
    mut progress_callback: F,
) -> Result<(), ShowScoutError>
where
    C: ShowCatalog + ?Sized,
    F: FnMut(ProgressEvent),
{
    progress_callback(ProgressEvent::FetchingEpisodes { show_id });

    let instruction = handle_command(catalog, Command::ShowEpisodes { show_id })?;
    apply(page, instruction);

    progress_callback(ProgressEvent::EpisodesFound {
        show_id,
        count: page.episodes_area.lines().len(),
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::tests::{FakeCatalog, batman_catalog};

    #[test]
    fn test_search_without_image_gets_placeholder() {
        let catalog = batman_catalog();
        let mut page = Page::new();

        search_for_show_and_display(&catalog, &mut page, "batman", |_| {}).unwrap();

        let cards = page.shows_list.cards();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].show().image, DEFAULT_IMAGE_URL);
    }

    #[test]
    fn test_search_with_no_results_empties_list() {
        let mut page = Page::new();
        search_for_show_and_display(&batman_catalog(), &mut page, "batman", |_| {}).unwrap();

        let empty = FakeCatalog::default();
        search_for_show_and_display(&empty, &mut page, "zzzz", |_| {}).unwrap();

        assert!(page.shows_list.is_empty());
    }

    #[test]
    fn test_search_reports_progress() {
        let mut events = Vec::new();
        let mut page = Page::new();

        search_for_show_and_display(&batman_catalog(), &mut page, "batman", |event| {
            events.push(event)
        })
        .unwrap();

        assert!(matches!(&events[0], ProgressEvent::Searching { term } if term == "batman"));
        assert!(matches!(events[1], ProgressEvent::ShowsFound { count: 1, .. }));
    }

    #[test]
    fn test_episodes_trigger_reveals_and_replaces() {
        let catalog = batman_catalog();
        let mut page = Page::new();
        search_for_show_and_display(&catalog, &mut page, "batman", |_| {}).unwrap();
        page.episodes_area.append("Old (Season 3, Episode 3)".to_string());
        assert!(!page.episodes_area.is_visible());

        get_episodes_and_display(&catalog, &mut page, EpisodesTrigger { card: 0 }, |_| {})
            .unwrap();

        assert!(page.episodes_area.is_visible());
        assert_eq!(
            page.episodes_area.lines(),
            ["Pilot (Season 1, Episode 1)".to_string()]
        );
        assert_eq!(
            *catalog.requests.borrow(),
            vec!["search:batman".to_string(), "episodes:1".to_string()]
        );
    }

    #[test]
    fn test_new_search_hides_episodes() {
        let catalog = batman_catalog();
        let mut page = Page::new();
        search_for_show_and_display(&catalog, &mut page, "batman", |_| {}).unwrap();
        get_episodes_and_display(&catalog, &mut page, EpisodesTrigger { card: 0 }, |_| {})
            .unwrap();

        search_for_show_and_display(&catalog, &mut page, "batman", |_| {}).unwrap();

        assert!(!page.episodes_area.is_visible());
    }

    #[test]
    fn test_fetch_episodes_by_show_id() {
        let catalog = batman_catalog();
        let mut page = Page::new();
        let mut events = Vec::new();

        fetch_episodes_and_display(&catalog, &mut page, 1, |event| events.push(event)).unwrap();

        assert!(page.shows_list.is_empty());
        assert!(page.episodes_area.is_visible());
        assert_eq!(
            page.episodes_area.lines(),
            ["Pilot (Season 1, Episode 1)".to_string()]
        );
        assert!(matches!(events[0], ProgressEvent::FetchingEpisodes { show_id: 1 }));
        assert!(matches!(
            events[1],
            ProgressEvent::EpisodesFound {
                show_id: 1,
                count: 1
            }
        ));
    }

    #[test]
    fn test_unknown_trigger() {
        let catalog = batman_catalog();
        let mut page = Page::new();

        let result =
            get_episodes_and_display(&catalog, &mut page, EpisodesTrigger { card: 3 }, |_| {});

        assert!(matches!(result, Err(ShowScoutError::UnknownTrigger(3))));
        assert!(catalog.requests.borrow().is_empty());
    }

    #[test]
    fn test_failed_search_keeps_page() {
        let mut page = Page::new();
        search_for_show_and_display(&batman_catalog(), &mut page, "batman", |_| {}).unwrap();

        let failing = FakeCatalog {
            fail: true,
            ..Default::default()
        };
        let result = search_for_show_and_display(&failing, &mut page, "robin", |_| {});

        assert!(matches!(result, Err(ShowScoutError::Catalog(_))));
        assert_eq!(page.term, "batman");
        assert_eq!(page.shows_list.cards().len(), 1);
    }
}
