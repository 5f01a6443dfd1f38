//! CLI configuration and execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use moduo_commerce::builder::BuilderStore;
use moduo_commerce::cart::CartStore;
use moduo_storage::KvStore;
use serde::{Deserialize, Serialize};

use crate::output::Output;

/// CLI configuration file (`moduo.toml`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Directory holding the persisted cart and saved configurations.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".moduo")
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config: {path}"))
    }
}

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
}

impl Context {
    /// Load context from a config file, or search upward for `moduo.toml`.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            Self::find_config().unwrap_or_default()
        };
        Ok(Self { config, output })
    }

    /// Find `moduo.toml` in the current directory or a parent.
    fn find_config() -> Option<CliConfig> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join("moduo.toml");
            if candidate.exists() {
                if let Ok(config) = CliConfig::load(candidate.to_str()?) {
                    return Some(config);
                }
            }
            if !current.pop() {
                break;
            }
        }
        None
    }

    /// Open the persistence backend under the configured data directory.
    pub fn open_storage(&self) -> Result<KvStore> {
        KvStore::open(&self.config.data_dir).with_context(|| {
            format!(
                "Failed to open data directory: {}",
                self.config.data_dir.display()
            )
        })
    }

    /// A builder store backed by the data directory.
    pub fn builder_store(&self) -> Result<BuilderStore> {
        Ok(BuilderStore::with_storage(self.open_storage()?))
    }

    /// A cart store backed by the data directory.
    pub fn cart_store(&self) -> Result<CartStore> {
        Ok(CartStore::with_storage(self.open_storage()?))
    }

    /// The data directory path, for messages.
    pub fn data_dir(&self) -> &Path {
        &self.config.data_dir
    }
}
