//! Clap command tree definition.

use clap::{Arg, ArgAction, Command};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("deltasearch")
        .about("Minimal full-text search engine")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .help("Config file (default: deltasearch.toml, if present)")
                .global(true),
        )
        .arg(
            Arg::new("index-dir")
                .long("index-dir")
                .help("Index directory (overrides config and INDEX_DIR_PATH)")
                .global(true),
        )
        .subcommand(build_init())
        .subcommand(build_index())
        .subcommand(build_search())
}

// =========================================================================
// Init
// =========================================================================

fn build_init() -> Command {
    Command::new("init").about(
        "Write a config file (deltasearch.toml or --config) if none exists; \
         --index-dir is recorded in it",
    )
}

// =========================================================================
// Index
// =========================================================================

fn build_index() -> Command {
    Command::new("index")
        .about("Index files and flush the index to disk")
        .arg(
            Arg::new("files")
                .help("Files to index; each file is one document titled by its path")
                .required(true)
                .num_args(1..)
                .action(ArgAction::Append),
        )
}

// =========================================================================
// Search
// =========================================================================

fn build_search() -> Command {
    Command::new("search")
        .about("Find documents containing every query term")
        .arg(
            Arg::new("query")
                .help("Query text")
                .required(true)
                .num_args(1..)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("k")
                .short('k')
                .long("top")
                .help("Maximum number of results (default: default_k from config)")
                .value_parser(clap::value_parser!(usize)),
        )
}
