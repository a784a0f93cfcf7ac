// demos/kitsu_trending.rs
//
// Wires the full application state against the live catalog and prints the
// trending page, or search results when a query is given:
//
//   cargo run --example kitsu_trending
//   cargo run --example kitsu_trending -- "cowboy bebop"

use anyhow::{anyhow, Context};

use animewall::application::commands::{fetch_trending, get_recommendation, search_catalog};
use animewall::dto::{CatalogItemDto, SearchResultDto};
use animewall::{init_logger, AppConfig, AppState};

fn print_items(items: &[CatalogItemDto]) {
    for item in items {
        let rating = item
            .rating
            .map(|r| format!("{:.1}", r))
            .unwrap_or_else(|| "-".to_string());
        let heart = if item.is_favorite { "♥" } else { " " };
        println!("{} {:>6}  {:<50} {}", heart, item.id, item.title, rating);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    // 1. CONFIGURATION
    let config = AppConfig::from_env().context("reading configuration")?;

    // 2. STATE
    let state = AppState::new(config).context("initializing application state")?;
    if let Err(e) = state.load() {
        log::warn!("Starting with partially loaded data: {}", e);
    }

    // 3. RUN
    match std::env::args().nth(1) {
        Some(query) => {
            let result = search_catalog(&state, &query)
                .await
                .map_err(|e| anyhow!(e.message))?;
            match result {
                SearchResultDto::Results { page } => print_items(&page.items),
                SearchResultDto::Cleared => println!("Query too short"),
                SearchResultDto::Superseded => println!("Search superseded"),
            }
        }
        None => {
            let page = fetch_trending(&state, 0).await.map_err(|e| anyhow!(e.message))?;
            print_items(&page.items);

            let row = get_recommendation(&state, "mood")
                .await
                .map_err(|e| anyhow!(e.message))?;
            println!("\n{} ({})", row.title, row.keyword);
            print_items(&row.items);
        }
    }

    Ok(())
}
