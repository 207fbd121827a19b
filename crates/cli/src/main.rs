//! deltasearch CLI
//!
//! - `deltasearch init`: write a config file if none exists
//! - `deltasearch index FILE...`: index files and flush to the index directory
//! - `deltasearch search QUERY... [-k N]`: AND query against the flushed index
//!
//! Logging goes to stderr, filtered by `RUST_LOG` (default `warn`).

mod commands;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process;

use clap::ArgMatches;
use deltasearch_core::{Error, Result};
use deltasearch_engine::{Engine, EngineConfig, CONFIG_FILE_NAME};
use deltasearch_search::Searcher;
use deltasearch_storage::IndexReader;
use tracing_subscriber::EnvFilter;

use commands::build_cli;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let matches = build_cli().get_matches();

    if let Some(("init", sub)) = matches.subcommand() {
        if let Err(e) = run_init(sub) {
            eprintln!("(error) {}", e);
            process::exit(1);
        }
        return;
    }

    let config = match load_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("(error) {}", e);
            process::exit(1);
        }
    };

    let result = match matches.subcommand() {
        Some(("index", sub)) => run_index(config, sub),
        Some(("search", sub)) => run_search(config, sub),
        _ => Ok(()),
    };

    if let Err(e) = result {
        eprintln!("(error) {}", e);
        process::exit(1);
    }
}

/// Resolve configuration: file, then `INDEX_DIR_PATH`, then `--index-dir`.
///
/// An explicit `--config` must exist; the implicit `deltasearch.toml` may not.
fn load_config(matches: &ArgMatches) -> Result<EngineConfig> {
    let config = match matches.get_one::<String>("config") {
        Some(path) => EngineConfig::from_file(Path::new(path))?,
        None => EngineConfig::load_or_default(Path::new(CONFIG_FILE_NAME))?,
    };
    let index_dir = matches.get_one::<String>("index-dir").map(PathBuf::from);
    let config = config.with_env_overrides().with_index_dir_override(index_dir);

    tracing::debug!(
        target: "deltasearch::cli",
        index_dir = %config.index_dir.display(),
        tokenizer = %config.tokenizer,
        default_k = config.default_k,
        "Configuration resolved"
    );
    Ok(config)
}

/// Write a config file without reading one first.
fn run_init(matches: &ArgMatches) -> Result<()> {
    let path = matches
        .get_one::<String>("config")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
    let index_dir = matches.get_one::<String>("index-dir").map(PathBuf::from);

    if EngineConfig::init(&path, index_dir)? {
        println!("wrote {}", path.display());
    } else {
        println!("{} already exists, left unchanged", path.display());
    }
    Ok(())
}

fn run_index(config: EngineConfig, matches: &ArgMatches) -> Result<()> {
    let mut engine = Engine::in_memory(config)?;

    let mut added = Vec::new();
    for path in matches.get_many::<String>("files").into_iter().flatten() {
        let file = File::open(path).map_err(|e| Error::persistence(path, e))?;
        let id = engine.add_document(path, &mut BufReader::new(file))?;
        added.push((id, path));
    }

    engine.flush()?;

    for (id, path) in added {
        println!("{}\t{}", id, path);
    }
    Ok(())
}

fn run_search(config: EngineConfig, matches: &ArgMatches) -> Result<()> {
    let tokenizer = config.tokenizer_kind()?.build();
    let k = matches
        .get_one::<usize>("k")
        .copied()
        .unwrap_or(config.default_k);

    let query = matches
        .get_many::<String>("query")
        .into_iter()
        .flatten()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");
    let terms = tokenizer.text_to_term_sequence(&query)?;

    let reader = IndexReader::new(config.index_dir);
    let top = Searcher::new(&reader).search_top_k(&terms, k)?;

    for doc in &top.score_docs {
        println!("{}\t{:.6}", doc.doc_id, doc.score);
    }
    println!("total hits: {}", top.total_hits);
    Ok(())
}
