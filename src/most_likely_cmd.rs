//! Most-likely command: report the top state from a counts file.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use gridstate_counts::{most_likely_state, ranked_states};

use crate::cli::MostLikelyArgs;
use crate::counts_file;

/// Run the most-likely command.
pub fn run(args: MostLikelyArgs) -> Result<()> {
    let _cmd = info_span!("most_likely").entered();
    let counts = counts_file::read_counts(&args.counts)?;

    if args.ranked {
        let ranked = ranked_states(counts).context("cannot rank states")?;
        for (state, count) in &ranked {
            println!("{state}\t{count}");
        }
        return Ok(());
    }

    let state = most_likely_state(counts).context("cannot pick most likely state")?;
    info!(state = %state, "most likely state");
    println!("{state}");
    Ok(())
}
