use clap::{ArgAction, Parser, Subcommand};
use search_core::FilterOption;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Snapshot JSON file with users, sneakers and posts (overrides `data-path`)
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    /// Increase verbosity. Can be used multiple times (e.g., -v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search users, sneakers and posts once
    Search {
        query: String,
        /// Which result group to show: all, users, sneakers or posts
        #[arg(short, long, default_value_t = FilterOption::All)]
        filter: FilterOption,
    },
    /// Show the most owned sneakers
    Trending,
    /// Type queries line by line; results appear after the debounce window
    Interactive,
}
