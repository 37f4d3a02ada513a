//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result};

use gridstate_grid::GridConfig;

use crate::config::GridToml;

/// Builds a validated [`GridConfig`] from the TOML grid section.
pub fn build_grid_config(grid: &GridToml) -> Result<GridConfig> {
    let cfg = GridConfig::new()
        .with_columns(grid.columns)
        .with_rows(grid.rows);
    cfg.validate().context("invalid [grid] configuration")?;
    Ok(cfg)
}
