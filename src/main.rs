use clap::{Parser, Subcommand};
use dialoguer::{Input, Select};
use show_scout::{
    CatalogConfig, DEFAULT_BASE_URL, DEFAULT_IMAGE_URL, EpisodesTrigger, Page,
    ProgressEvent, RenderError, ShowScoutError, TvMazeCatalog, fetch_episodes_and_display,
    get_episodes_and_display, search_for_show_and_display,
};
use std::process;
use thiserror::Error;

/// Search the TVMaze catalog for tv shows and browse their episodes
#[derive(Parser, Debug)]
#[command(name = "show-scout", version, about)]
struct Cli {
    /// Base URL of the TVMaze API
    #[arg(long, global = true, env = "SHOW_SCOUT_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Image URL used for shows without an image
    #[arg(long, global = true, env = "SHOW_SCOUT_DEFAULT_IMAGE", default_value = DEFAULT_IMAGE_URL)]
    default_image: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search for shows matching a term
    Search {
        /// The search term (may be empty)
        term: String,

        /// Print the page as HTML instead of text
        #[arg(long)]
        html: bool,
    },

    /// List the episodes of a show
    Episodes {
        /// The TVMaze id of the show
        show_id: u64,

        /// Print the episode list items as HTML instead of text
        #[arg(long)]
        html: bool,
    },

    /// Search and pick shows interactively (default)
    Browse,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    ShowScout(#[from] ShowScoutError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Prints progress events to stderr so stdout only carries the page
fn handle_progress_event(event: ProgressEvent) {
    match event {
        ProgressEvent::Searching { term } => {
            eprintln!("Searching for '{}'...", term);
        }
        ProgressEvent::ShowsFound { count, .. } => {
            eprintln!("Found {} show(s)\n", count);
        }
        ProgressEvent::FetchingEpisodes { show_id } => {
            eprintln!("Fetching episodes of show {}...", show_id);
        }
        ProgressEvent::EpisodesFound { count, .. } => {
            eprintln!("Found {} episode(s)\n", count);
        }
    }
}

fn print_page(page: &Page, html: bool) -> Result<(), CliError> {
    if html {
        println!("{}", page.to_html()?);
    } else {
        print!("{}", page.to_text());
    }
    Ok(())
}

fn search(catalog: &TvMazeCatalog, term: &str, html: bool) -> Result<(), CliError> {
    let mut page = Page::new();
    search_for_show_and_display(catalog, &mut page, term, handle_progress_event)?;
    print_page(&page, html)
}

fn episodes(catalog: &TvMazeCatalog, show_id: u64, html: bool) -> Result<(), CliError> {
    let mut page = Page::new();
    fetch_episodes_and_display(catalog, &mut page, show_id, handle_progress_event)?;

    if html {
        println!("{}", page.episodes_area.to_html()?);
    } else {
        for line in page.episodes_area.lines() {
            println!("{}", line);
        }
    }
    Ok(())
}

/// Only a truly empty input ends the interactive loop; any other term,
/// including whitespace, is searched as typed
fn is_quit(term: &str) -> bool {
    term.is_empty()
}

/// Interactive loop: search form, then an "Episodes" pick per show
fn browse(catalog: &TvMazeCatalog) -> Result<(), CliError> {
    let mut page = Page::new();

    loop {
        let term: String = Input::new()
            .with_prompt("Search for a show (empty to quit)")
            .allow_empty(true)
            .interact_text()?;

        if is_quit(&term) {
            return Ok(());
        }

        search_for_show_and_display(catalog, &mut page, &term, handle_progress_event)?;
        print_page(&page, false)?;

        if page.shows_list.is_empty() {
            continue;
        }

        loop {
            let items: Vec<String> = page
                .shows_list
                .cards()
                .iter()
                .map(|card| format!("Episodes of {}", card.show().name))
                .chain(std::iter::once("New search".to_string()))
                .collect();

            let selection = Select::new()
                .with_prompt("Pick a show")
                .items(&items)
                .default(0)
                .interact_opt()?;

            match selection {
                Some(card) if card < page.shows_list.cards().len() => {
                    get_episodes_and_display(
                        catalog,
                        &mut page,
                        EpisodesTrigger { card },
                        handle_progress_event,
                    )?;
                    print_page(&page, false)?;
                }
                _ => break,
            }
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let catalog = TvMazeCatalog::with_config(CatalogConfig::new(cli.base_url, cli.default_image));

    match cli.command.unwrap_or(Commands::Browse) {
        Commands::Search { term, html } => search(&catalog, &term, html),
        Commands::Episodes { show_id, html } => episodes(&catalog, show_id, html),
        Commands::Browse => browse(&catalog),
    }
}

fn main() {
    pretty_env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("\nError: {}", e);
        process::exit(1);
    }
}
