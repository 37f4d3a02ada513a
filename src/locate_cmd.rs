//! Locate command: most likely state from a counts file, placed on the grid.

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use gridstate_counts::most_likely_state;
use gridstate_grid::bin_state_to_grid_coordinates_with;

use crate::cli::LocateArgs;
use crate::config::GridstateConfig;
use crate::convert;
use crate::counts_file;

/// Run the locate command.
pub fn run(args: LocateArgs) -> Result<()> {
    let _cmd = info_span!("locate").entered();
    // 1. Config
    let config = GridstateConfig::load(args.config.as_deref())?;
    let grid = convert::build_grid_config(&config.grid)?;

    // 2. Most likely state
    let counts = counts_file::read_counts(&args.counts)?;
    let state = most_likely_state(counts).context("cannot pick most likely state")?;
    info!(state = %state, "most likely state");

    // 3. Coordinates
    let coord = bin_state_to_grid_coordinates_with(&state, &grid)
        .with_context(|| format!("most likely state {state:?} is not a binary state"))?;
    if !grid.contains(coord) {
        warn!(
            state = %state,
            %coord,
            rows = ?grid.rows(),
            "coordinate lies outside the configured grid"
        );
    }

    println!("{state} {coord}");
    Ok(())
}
