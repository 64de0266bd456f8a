use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for citysuggest
#[derive(Debug, Parser)]
#[command(
    name = "citysuggest",
    version,
    about = "City autocomplete with a remembered list of recent picks"
)]
pub struct CliArgs {
    /// JSON config file (limit, recent_capacity, storage_key, fold_accents)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// JSON (or .json.gz) catalog to use instead of the built-in cities
    #[arg(short = 'i', long = "catalog", global = true)]
    pub catalog: Option<PathBuf>,

    /// Directory holding the recent-selections file
    #[arg(short = 's', long = "store-dir", global = true)]
    pub store_dir: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rank catalog cities matching a query
    Search {
        /// Free text (case-insensitive substring)
        query: String,
        /// Maximum number of suggestions
        #[arg(short = 'n', long = "limit", default_value_t = citysuggest_core::DEFAULT_LIMIT)]
        limit: usize,
    },

    /// List every city in the catalog
    Catalog {
        /// Print display names (city without region) instead of full labels
        #[arg(long)]
        names: bool,
    },

    /// Show recent selections, most recent first
    Recent,

    /// Select a city label and remember it
    Select {
        /// Full label, e.g. "Madrid, España"
        label: String,
    },

    /// Forget all recent selections
    ClearRecent,

    /// Line-driven session: text lines update the query, `:help` lists commands
    Interactive,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn catalog_names_flag_parses() {
        let args = CliArgs::try_parse_from(["citysuggest", "catalog", "--names"]).unwrap();
        assert!(matches!(args.command, Commands::Catalog { names: true }));

        let args = CliArgs::try_parse_from(["citysuggest", "catalog"]).unwrap();
        assert!(matches!(args.command, Commands::Catalog { names: false }));
    }
}
