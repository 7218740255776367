//! Rendering module
//!
//! This module owns the page state shown to the user: the shows list, made of
//! one card per show, and the episodes area, which starts hidden. Containers
//! are explicit handles passed to the render functions. Markup is produced
//! with askama templates, which escape everything except the show summary.

use crate::catalog::{Episode, Show};
use askama::Template;
use thiserror::Error;

/// Errors that can occur while producing markup
#[derive(Debug, Error)]
pub enum RenderError {
    /// A template failed to render
    #[error("Failed to render template: {0}")]
    Template(#[from] askama::Error),
}

#[derive(Template)]
#[template(path = "show_card.html")]
struct ShowCardTemplate<'a> {
    show: &'a Show,
}

#[derive(Template)]
#[template(path = "episodes_list.html")]
struct EpisodesListTemplate<'a> {
    lines: &'a [String],
}

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    term: &'a str,
    shows_list: &'a str,
    episodes_visible: bool,
    episodes_list: &'a str,
}

/// Identifies the "Episodes" control of a rendered show card.
///
/// Cards are addressed by their position in the shows list, starting at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodesTrigger {
    pub card: usize,
}

/// A rendered show card, tagged with the id of its show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowCard {
    show: Show,
}

impl ShowCard {
    /// Returns the id of the show this card displays
    pub fn show_id(&self) -> u64 {
        self.show.id
    }

    /// Returns the show this card displays
    pub fn show(&self) -> &Show {
        &self.show
    }

    /// Renders the card markup
    pub fn to_html(&self) -> Result<String, RenderError> {
        Ok(ShowCardTemplate { show: &self.show }.render()?)
    }
}

/// Container holding the show cards of the latest search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowsList {
    cards: Vec<ShowCard>,
}

impl ShowsList {
    /// Removes all cards
    pub fn empty(&mut self) {
        self.cards.clear();
    }

    /// Appends a card for the given show
    pub fn append(&mut self, show: Show) {
        self.cards.push(ShowCard { show });
    }

    pub fn cards(&self) -> &[ShowCard] {
        &self.cards
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Resolves an "Episodes" trigger to the id of the show card enclosing it.
    ///
    /// Returns `None` if the trigger does not belong to a rendered card.
    pub fn closest_show_id(&self, trigger: EpisodesTrigger) -> Option<u64> {
        self.cards.get(trigger.card).map(ShowCard::show_id)
    }

    /// Renders all cards, in order
    pub fn to_html(&self) -> Result<String, RenderError> {
        let mut html = String::new();
        for card in &self.cards {
            html.push_str(&card.to_html()?);
        }
        Ok(html)
    }
}

/// Container listing the episodes of one show. Hidden until populated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EpisodesArea {
    visible: bool,
    lines: Vec<String>,
}

impl EpisodesArea {
    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Removes all list items
    pub fn empty(&mut self) {
        self.lines.clear();
    }

    /// Appends a list item with the given text
    pub fn append(&mut self, line: String) {
        self.lines.push(line);
    }

    /// Returns the text of all list items, in order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Renders the `<li>` items of the episode list
    pub fn to_html(&self) -> Result<String, RenderError> {
        Ok(EpisodesListTemplate { lines: &self.lines }.render()?)
    }
}

/// The complete page: search term, shows list and episodes area.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub term: String,
    pub shows_list: ShowsList,
    pub episodes_area: EpisodesArea,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the whole page as an HTML document
    pub fn to_html(&self) -> Result<String, RenderError> {
        let shows_list = self.shows_list.to_html()?;
        let episodes_list = self.episodes_area.to_html()?;

        Ok(PageTemplate {
            term: &self.term,
            shows_list: &shows_list,
            episodes_visible: self.episodes_area.is_visible(),
            episodes_list: &episodes_list,
        }
        .render()?)
    }

    /// Renders the page as plain text for terminal output.
    ///
    /// Summaries are converted from HTML to text. The episodes area is only
    /// included while it is visible.
    pub fn to_text(&self) -> String {
        let mut text = String::new();

        if self.shows_list.is_empty() {
            text.push_str("No shows found.\n");
        }

        for (index, card) in self.shows_list.cards().iter().enumerate() {
            let show = card.show();
            text.push_str(&format!("[{}] {} (id {})\n", index + 1, show.name, show.id));

            let summary = nanohtml2text::html2text(&show.summary);
            let summary = summary.trim();
            if !summary.is_empty() {
                text.push_str(&format!("    {}\n", summary));
            }
            text.push_str(&format!("    Image: {}\n\n", show.image));
        }

        if self.episodes_area.is_visible() {
            text.push_str("Episodes:\n");
            for line in self.episodes_area.lines() {
                text.push_str(&format!("  - {}\n", line));
            }
        }

        text
    }
}

/// Formats an episode as a list line: `<name> (Season <season>, Episode <number>)`
pub fn format_episode_line(episode: &Episode) -> String {
    format!(
        "{} (Season {}, Episode {})",
        episode.name, episode.season, episode.number
    )
}

/// Replaces the shows list content with one card per show
pub fn populate_shows(shows_list: &mut ShowsList, shows: &[Show]) {
    shows_list.empty();

    for show in shows {
        shows_list.append(show.clone());
    }
}

/// Replaces the episode list content and reveals the episodes area
pub fn populate_episodes(episodes_area: &mut EpisodesArea, episodes: &[Episode]) {
    episodes_area.empty();

    for episode in episodes {
        episodes_area.append(format_episode_line(episode));
    }

    episodes_area.show();
}
