//! Command handlers
//!
//! User actions are expressed as `Command`s. Handling a command talks to the
//! catalog and yields a `RenderInstruction`, which is then applied to a page.

use crate::catalog::{CatalogError, Episode, Show, ShowCatalog};
use crate::render::{Page, populate_episodes, populate_shows};
use log::info;

/// An action requested by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Submit the search form with the given term
    Search { term: String },
    /// Show the episode list of a show
    ShowEpisodes { show_id: u64 },
}

/// A change to apply to the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderInstruction {
    /// Replace the shows list and hide the episodes area
    ReplaceShows { term: String, shows: Vec<Show> },
    /// Replace the episode list and reveal the episodes area
    ReplaceEpisodes(Vec<Episode>),
}

/// Executes a command against the catalog
///
/// # Errors
///
/// Catalog errors are returned unchanged; nothing is retried.
pub fn handle_command<C>(catalog: &C, command: Command) -> Result<RenderInstruction, CatalogError>
where
    C: ShowCatalog + ?Sized,
{
    match command {
        Command::Search { term } => {
            let shows = catalog.search_shows(&term)?;
            info!("Found {} show(s) for {:?}", shows.len(), term);
            Ok(RenderInstruction::ReplaceShows { term, shows })
        }
        Command::ShowEpisodes { show_id } => {
            let episodes = catalog.fetch_episodes(show_id)?;
            info!("Found {} episode(s) for show {}", episodes.len(), show_id);
            Ok(RenderInstruction::ReplaceEpisodes(episodes))
        }
    }
}

/// Applies a render instruction to the page
pub fn apply(page: &mut Page, instruction: RenderInstruction) {
    match instruction {
        RenderInstruction::ReplaceShows { term, shows } => {
            page.term = term;
            page.episodes_area.hide();
            populate_shows(&mut page.shows_list, &shows);
        }
        RenderInstruction::ReplaceEpisodes(episodes) => {
            populate_episodes(&mut page.episodes_area, &episodes);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::config::DEFAULT_IMAGE_URL;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory catalog recording the requests it receives
    #[derive(Default)]
    pub(crate) struct FakeCatalog {
        pub shows: Vec<Show>,
        pub episodes: HashMap<u64, Vec<Episode>>,
        pub fail: bool,
        pub requests: RefCell<Vec<String>>,
    }

    impl ShowCatalog for FakeCatalog {
        fn search_shows(&self, term: &str) -> Result<Vec<Show>, CatalogError> {
            self.requests.borrow_mut().push(format!("search:{}", term));
            if self.fail {
                return Err(CatalogError::RequestError("connection refused".to_string()));
            }
            Ok(self.shows.clone())
        }

        fn fetch_episodes(&self, show_id: u64) -> Result<Vec<Episode>, CatalogError> {
            self.requests.borrow_mut().push(format!("episodes:{}", show_id));
            if self.fail {
                return Err(CatalogError::RequestError("connection refused".to_string()));
            }
            Ok(self.episodes.get(&show_id).cloned().unwrap_or_default())
        }
    }

    pub(crate) fn batman_catalog() -> FakeCatalog {
        let mut episodes = HashMap::new();
        episodes.insert(
            1,
            vec![Episode {
                id: 1,
                name: "Pilot".to_string(),
                season: 1,
                number: 1,
            }],
        );

        FakeCatalog {
            shows: vec![Show {
                id: 1,
                name: "Batman".to_string(),
                summary: "<p>Gotham</p>".to_string(),
                image: DEFAULT_IMAGE_URL.to_string(),
            }],
            episodes,
            ..Default::default()
        }
    }

    #[test]
    fn test_search_command() {
        let catalog = batman_catalog();
        let instruction = handle_command(
            &catalog,
            Command::Search {
                term: "batman".to_string(),
            },
        )
        .unwrap();

        assert_eq!(
            instruction,
            RenderInstruction::ReplaceShows {
                term: "batman".to_string(),
                shows: catalog.shows.clone(),
            }
        );
        assert_eq!(*catalog.requests.borrow(), vec!["search:batman".to_string()]);
    }

    #[test]
    fn test_show_episodes_command() {
        let catalog = batman_catalog();
        let instruction = handle_command(&catalog, Command::ShowEpisodes { show_id: 1 }).unwrap();

        assert_eq!(
            instruction,
            RenderInstruction::ReplaceEpisodes(catalog.episodes[&1].clone())
        );
    }

    #[test]
    fn test_catalog_errors_propagate() {
        let catalog = FakeCatalog {
            fail: true,
            ..Default::default()
        };

        let result = handle_command(&catalog, Command::ShowEpisodes { show_id: 1 });
        assert!(matches!(result, Err(CatalogError::RequestError(_))));
    }

    #[test]
    fn test_replace_shows_hides_episodes() {
        let catalog = batman_catalog();
        let mut page = Page::new();

        apply(
            &mut page,
            RenderInstruction::ReplaceEpisodes(catalog.episodes[&1].clone()),
        );
        assert!(page.episodes_area.is_visible());

        apply(
            &mut page,
            RenderInstruction::ReplaceShows {
                term: "batman".to_string(),
                shows: catalog.shows.clone(),
            },
        );

        assert!(!page.episodes_area.is_visible());
        assert_eq!(page.term, "batman");
        assert_eq!(page.shows_list.cards().len(), 1);
    }

    #[test]
    fn test_last_applied_instruction_wins() {
        let mut page = Page::new();
        let episode = |name: &str| Episode {
            id: 1,
            name: name.to_string(),
            season: 1,
            number: 1,
        };

        apply(&mut page, RenderInstruction::ReplaceEpisodes(vec![episode("First")]));
        apply(&mut page, RenderInstruction::ReplaceEpisodes(vec![episode("Second")]));

        assert_eq!(
            page.episodes_area.lines(),
            ["Second (Season 1, Episode 1)".to_string()]
        );
    }
}
