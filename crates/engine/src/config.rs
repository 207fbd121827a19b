//! Engine configuration via `deltasearch.toml`
//!
//! Every field has a default, so an empty (or missing) file is a valid
//! configuration. The `INDEX_DIR_PATH` environment variable overrides the
//! index directory.

use deltasearch_core::{Error, Result};
use deltasearch_index::TokenizerKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file name looked up by the CLI.
pub const CONFIG_FILE_NAME: &str = "deltasearch.toml";

/// Environment variable overriding `index_dir`.
pub const INDEX_DIR_ENV: &str = "INDEX_DIR_PATH";

/// Index directory used when nothing else is configured.
pub const DEFAULT_INDEX_DIR: &str = "_index_data";

/// Engine configuration loaded from `deltasearch.toml`.
///
/// # Example
///
/// ```toml
/// index_dir = "_index_data"
/// tokenizer = "english"
/// default_k = 10
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineConfig {
    /// Directory holding one file per term plus `_0.dc`.
    #[serde(default = "default_index_dir")]
    pub index_dir: PathBuf,
    /// Tokenizer: `"english"` or `"unsegmented"`.
    #[serde(default = "default_tokenizer_str")]
    pub tokenizer: String,
    /// Number of results returned when the caller does not choose one.
    #[serde(default = "default_k")]
    pub default_k: usize,
}

fn default_index_dir() -> PathBuf {
    PathBuf::from(DEFAULT_INDEX_DIR)
}

fn default_tokenizer_str() -> String {
    TokenizerKind::English.as_str().to_string()
}

fn default_k() -> usize {
    10
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            index_dir: default_index_dir(),
            tokenizer: default_tokenizer_str(),
            default_k: default_k(),
        }
    }
}

impl EngineConfig {
    /// Parse the tokenizer string into a `TokenizerKind`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the name is not a known tokenizer.
    pub fn tokenizer_kind(&self) -> Result<TokenizerKind> {
        self.tokenizer.parse()
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# deltasearch configuration
#
# Index directory: one file per term plus the document count file "_0.dc".
# Overridden by the INDEX_DIR_PATH environment variable.
index_dir = "_index_data"

# Tokenizer: "english" (default) or "unsegmented"
#   "english"     = split on whitespace, keep ASCII letters/digits, lowercase
#   "unsegmented" = reserved for scripts without word spacing (not implemented)
tokenizer = "english"

# Number of results returned when no count is given.
default_k = 10
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the file cannot be read and `Config` if it
    /// cannot be parsed or names an unknown tokenizer.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| Error::persistence(path, e))?;
        let config: EngineConfig = toml::from_str(&content).map_err(|e| {
            Error::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        // Validate the tokenizer value eagerly
        config.tokenizer_kind()?;
        Ok(config)
    }

    /// Like `from_file`, but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::from_file(path) {
            Err(e) if e.is_not_found() => Ok(Self::default()),
            other => other,
        }
    }

    /// Write the default config file if it does not already exist.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| Error::persistence(path, e))?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| Error::persistence(path, e))
    }

    /// Create a config file at `path` unless one already exists.
    ///
    /// Without an index directory the commented default file is written;
    /// with one, the defaults plus that directory are serialized. Returns
    /// `false` when `path` already existed and nothing was written.
    pub fn init(path: &Path, index_dir: Option<PathBuf>) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        match index_dir {
            Some(dir) => Self::default()
                .with_index_dir_override(Some(dir))
                .write_to_file(path)?,
            None => Self::write_default_if_missing(path)?,
        }
        tracing::info!(
            target: "deltasearch::engine",
            path = %path.display(),
            "Config file created"
        );
        Ok(true)
    }

    /// Replace `index_dir` when an override is present.
    pub fn with_index_dir_override(mut self, index_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = index_dir {
            self.index_dir = dir;
        }
        self
    }

    /// Apply the `INDEX_DIR_PATH` environment override.
    pub fn with_env_overrides(self) -> Self {
        let dir = std::env::var_os(INDEX_DIR_ENV).map(PathBuf::from);
        self.with_index_dir_override(dir)
    }
}
