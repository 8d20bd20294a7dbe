//! `shopfront` — load a catalog file, replay intents, print the resulting page.
//!
//! ```text
//! shopfront <catalog.json> [intent ...]
//! shopfront products.json category=Men sort=low-high size=16 page=next
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use shopfront_browse::{BrowseConfig, BrowseSession, FacetOption, Intent, Page};
use shopfront_catalog::{Catalog, SortMode};

#[derive(Parser, Debug)]
#[command(name = "shopfront")]
#[command(about = "Browse a product catalog from the command line", long_about = None)]
struct Cli {
    /// JSON array of product records
    catalog: PathBuf,

    /// Browsing intents applied in order, e.g. `category=Men`, `sort=low-high`, `page=next`
    intents: Vec<Intent>,
}

#[derive(Debug, Serialize)]
struct Output<'a> {
    sort: SortMode,
    search: Option<&'a str>,
    facets: Vec<FacetOption>,
    page: &'a Page,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    shopfront_observability::init();

    let path = cli.catalog.display();
    let raw = std::fs::read_to_string(&cli.catalog)
        .with_context(|| format!("failed to read catalog {path}"))?;
    let catalog =
        Catalog::from_json_str(&raw).with_context(|| format!("invalid catalog {path}"))?;
    let config = BrowseConfig::from_env().context("invalid SHOPFRONT_* configuration")?;

    let mut session = BrowseSession::new(config, Arc::new(catalog))?;

    for intent in cli.intents {
        let label = format!("{intent:?}");
        session
            .apply(intent)
            .with_context(|| format!("intent {label} rejected"))?;
    }

    let output = Output {
        sort: session.sort_mode(),
        search: session.search().effective_term(),
        facets: session.facets(),
        page: session.view(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    tracing::info!(
        shown = session.view().items.len(),
        total = session.view().total_items,
        "done"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_catalog_and_intents_in_order() {
        let cli = Cli::try_parse_from([
            "shopfront",
            "products.json",
            "category=Men",
            "sort=low-high",
            "page=next",
        ])
        .unwrap();
        assert_eq!(cli.catalog, PathBuf::from("products.json"));
        assert_eq!(
            cli.intents,
            [
                Intent::ToggleCategory("Men".to_string()),
                Intent::SetSortMode(SortMode::PriceLowHigh),
                Intent::NextPage,
            ]
        );
    }

    #[test]
    fn intents_are_optional() {
        let cli = Cli::try_parse_from(["shopfront", "products.json"]).unwrap();
        assert!(cli.intents.is_empty());
    }

    #[test]
    fn catalog_path_is_required() {
        let err = Cli::try_parse_from(["shopfront"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn bad_intent_is_a_usage_error() {
        let err = Cli::try_parse_from(["shopfront", "products.json", "sort=popular"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }
}
