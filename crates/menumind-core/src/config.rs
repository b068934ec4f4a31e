//! Configuration and data directory management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default number of restaurant profiles handed to the LLM per query.
pub const DEFAULT_MAX_CONTEXT: usize = 100;

/// Default number of cuisine rows printed by `menumind stats`.
pub const DEFAULT_STATS_TOP: usize = 15;

/// Paths to all MenuMind data files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPaths {
    /// Root data directory (e.g., `data/`).
    pub root: PathBuf,
    /// Listing collection, raw or enriched (`data/restaurants.json`).
    pub restaurants_file: PathBuf,
    /// LLM configuration (`data/llm-config.json`).
    pub llm_config_file: PathBuf,
}

impl DataPaths {
    /// Create data paths from a root directory. Creates the root if needed.
    pub fn new(root: impl AsRef<Path>) -> std::io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        std::fs::create_dir_all(&root)?;
        Ok(Self {
            restaurants_file: root.join("restaurants.json"),
            llm_config_file: root.join("llm-config.json"),
            root,
        })
    }
}

/// Top-level MenuMind configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuMindConfig {
    /// Data directory paths.
    pub data_paths: DataPaths,
    /// Maximum listings included in an LLM context.
    pub max_context_restaurants: usize,
    /// Cuisine rows shown in the stats report.
    pub stats_top: usize,
}

impl MenuMindConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env(data_dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let max_context_restaurants =
            parse_positive(std::env::var("MENUMIND_MAX_CONTEXT").ok().as_deref())
                .unwrap_or(DEFAULT_MAX_CONTEXT);
        let stats_top = parse_positive(std::env::var("MENUMIND_STATS_TOP").ok().as_deref())
            .unwrap_or(DEFAULT_STATS_TOP);

        Ok(Self {
            data_paths: DataPaths::new(data_dir)?,
            max_context_restaurants,
            stats_top,
        })
    }
}

fn parse_positive(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|v| v.trim().parse::<usize>().ok()).filter(|&n| n > 0)
}
