//! Coords command: decode one binary state into grid coordinates.

use anyhow::{Context, Result};
use tracing::info_span;

use gridstate_grid::bin_state_to_grid_coordinates_with;

use crate::cli::CoordsArgs;
use crate::config::GridstateConfig;
use crate::convert;

/// Run the coords command.
pub fn run(args: CoordsArgs) -> Result<()> {
    let _cmd = info_span!("coords").entered();
    let config = GridstateConfig::load(args.config.as_deref())?;
    let grid = convert::build_grid_config(&config.grid)?;

    let coord = bin_state_to_grid_coordinates_with(&args.state, &grid)
        .with_context(|| format!("cannot decode state {:?}", args.state))?;
    println!("{coord}");
    Ok(())
}
