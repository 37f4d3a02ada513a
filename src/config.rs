use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level gridstate configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct GridstateConfig {
    /// Grid layout settings.
    #[serde(default)]
    pub grid: GridToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridToml {
    #[serde(default = "default_columns")]
    pub columns: usize,
    #[serde(default)]
    pub rows: Option<usize>,
}

impl Default for GridToml {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            rows: None,
        }
    }
}

fn default_columns() -> usize {
    gridstate_grid::GRID_COLUMNS
}

impl GridstateConfig {
    /// Loads the config file at `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}
