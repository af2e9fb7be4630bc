//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use market_catalog::Favorites;
use market_data::{
    static_catalog, CatalogOrigin, FallbackCatalog, LoadedCatalog, RemoteCatalog, StaticCatalog,
};

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names searched for, in order, in each directory.
const CONFIG_NAMES: [&str; 3] = ["market.toml", ".market.toml", "market.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Path of the config file in use, if any.
    pub config_path: Option<PathBuf>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, offline: bool, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        let mut config = config.with_env_overrides();
        config.catalog.offline |= offline;

        Ok(Self {
            config,
            output,
            cwd,
            config_path,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some((config, config_path));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Load the session catalog, falling back to the built-in one when the
    /// listing API cannot be reached.
    pub async fn load_catalog(&self) -> Result<LoadedCatalog> {
        if self.config.catalog.offline {
            self.output.debug("Offline mode, using the built-in catalog");
            return Ok(LoadedCatalog {
                catalog: static_catalog(),
                origin: CatalogOrigin::Fallback,
                primary_error: None,
            });
        }

        let remote = RemoteCatalog::new(self.config.remote_config())
            .context("Failed to create listing API client")?;
        let provider = FallbackCatalog::new(remote, StaticCatalog);

        let spinner = self.output.spinner("Loading listings...");
        let loaded = provider.load_catalog().await;
        spinner.finish_and_clear();

        let loaded = loaded.context("Failed to load catalog")?;
        if let Some(ref reason) = loaded.primary_error {
            self.output.warn(&format!(
                "Listing API unavailable ({}), showing the built-in catalog",
                reason
            ));
        }
        self.output.debug(&format!(
            "Loaded {} listings from {}",
            loaded.catalog.product_count(),
            loaded.origin
        ));

        Ok(loaded)
    }

    /// Path of the favorites file.
    pub fn favorites_path(&self) -> PathBuf {
        self.resolve_path(&self.config.catalog.favorites_file)
    }

    /// Load saved favorites; a missing file means none.
    pub fn load_favorites(&self) -> Result<Favorites> {
        let path = self.favorites_path();
        if !path.exists() {
            return Ok(Favorites::new());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read favorites: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse favorites: {}", path.display()))
    }

    /// Persist favorites, creating the parent directory if needed.
    pub fn save_favorites(&self, favorites: &Favorites) -> Result<()> {
        let path = self.favorites_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = serde_json::to_string_pretty(favorites)?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write favorites: {}", path.display()))
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}
