//! citysuggest: Command-line interface for citysuggest-core
//!
//! This binary exposes the city autocomplete engine in a terminal: ranked
//! suggestions for a query, the built-in catalog, and the remembered list
//! of recent selections.
//!
//! Usage examples
//! --------------
//!
//! - Rank cities for a query
//!   $ citysuggest search mad
//!   $ citysuggest search an --limit 3
//!
//! - Pick a city (prints the display name, remembers the full label)
//!   $ citysuggest select "Madrid, España"
//!
//! - List the catalog, full labels or display names only
//!   $ citysuggest catalog
//!   $ citysuggest catalog --names
//!
//! - Show or clear recent picks
//!   $ citysuggest recent
//!   $ citysuggest clear-recent
//!
//! - Type interactively, one event per line
//!   $ citysuggest interactive
//!
//! Storage
//! -------
//!
//! Recent picks are kept as JSON in the platform data directory unless
//! `--store-dir <dir>` points somewhere else.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use citysuggest_cli::{logging, repl};
use citysuggest_core::prelude::*;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    logging::init_logging(logging::level_for_verbosity(args.verbose))?;

    let config = match &args.config {
        Some(path) => SuggestConfig::from_path(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => SuggestConfig::default(),
    };

    let custom_catalog = match &args.catalog {
        Some(path) => Some(
            CityCatalog::from_path(path)
                .with_context(|| format!("loading catalog {}", path.display()))?,
        ),
        None => None,
    };
    let catalog = match &custom_catalog {
        Some(catalog) => catalog,
        None => CityCatalog::builtin(),
    };
    debug!(entries = catalog.len(), "catalog ready");

    let store = open_store(args.store_dir)?;

    match args.command {
        Commands::Search { query, limit } => {
            let index = SuggestionIndex::new(catalog).with_fold_accents(config.fold_accents);
            let ranked = index.rank(&query);
            if ranked.is_empty() {
                println!("No cities found matching: {query}");
            }
            for hit in ranked.into_iter().take(limit) {
                let tag = match hit.kind {
                    MatchKind::Prefix => "prefix",
                    MatchKind::Contains => "contains",
                };
                println!("{} ({tag})", hit.label);
            }
        }

        Commands::Catalog { names: false } => {
            for label in catalog.labels() {
                println!("{label}");
            }
        }

        Commands::Catalog { names: true } => {
            for name in catalog.display_names() {
                println!("{name}");
            }
        }

        Commands::Recent => {
            let session = SearchSession::new(catalog, store, config);
            if session.recent().is_empty() {
                println!("No recent selections.");
            }
            for label in session.recent().iter() {
                println!("{label}");
            }
        }

        Commands::Select { label } => {
            let mut session = SearchSession::new(catalog, store, config);
            match session.on_commit(CommitSource::Explicit(label.clone())) {
                Some(selection) => println!("{}", selection.display_name),
                None => eprintln!("Nothing to select in: {label:?}"),
            }
        }

        Commands::ClearRecent => {
            let mut session = SearchSession::new(catalog, store, config);
            session.clear_recent();
            println!("Recent selections cleared.");
        }

        Commands::Interactive => {
            let mut session = SearchSession::new(catalog, store, config);
            println!("Type to search, :help for commands.");
            repl::render(&session, &mut io::stdout())?;
            repl::run(&mut session, io::stdin().lock(), &mut io::stdout())?;
        }
    }

    Ok(())
}

fn open_store(dir: Option<PathBuf>) -> anyhow::Result<FileStore> {
    if let Some(dir) = dir {
        return Ok(FileStore::new(dir));
    }

    #[cfg(feature = "system-dirs")]
    {
        Ok(FileStore::system_default()?)
    }

    #[cfg(not(feature = "system-dirs"))]
    {
        Ok(FileStore::new(".citysuggest"))
    }
}
