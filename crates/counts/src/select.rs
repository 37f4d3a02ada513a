//! Most-likely state selection and count ranking.

use std::fmt::Display;

use tracing::{debug, trace};

use crate::error::CountsError;
use crate::value::CountValue;

/// Converts every `(state, count)` pair, preserving input order.
fn convert_all<I, K, V>(counts: I) -> Result<Vec<(String, f64)>, CountsError>
where
    I: IntoIterator<Item = (K, V)>,
    K: Display,
    V: CountValue,
{
    counts
        .into_iter()
        .map(|(state, value)| {
            let state = state.to_string();
            let count = value.to_count().map_err(|_| CountsError::Conversion {
                state: state.clone(),
                value: value.describe(),
            })?;
            if count.is_nan() {
                return Err(CountsError::NanCount { state });
            }
            trace!(state = %state, count, "converted count");
            Ok((state, count))
        })
        .collect()
}

/// Returns the state with the highest count.
///
/// Every count is converted before the maximum is taken, so a bad count
/// anywhere in the input fails the call. On ties the state that comes first in
/// iteration order wins.
///
/// # Errors
///
/// - [`CountsError::EmptyCounts`] if `counts` yields no entries.
/// - [`CountsError::Conversion`] if a count is not numeric.
/// - [`CountsError::NanCount`] if a count is NaN.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use gridstate_counts::most_likely_state;
///
/// let counts = BTreeMap::from([(0b00, 12), (0b01, 3), (0b11, 40)]);
/// assert_eq!(most_likely_state(&counts).unwrap(), "3");
/// ```
#[tracing::instrument(skip_all)]
pub fn most_likely_state<I, K, V>(counts: I) -> Result<String, CountsError>
where
    I: IntoIterator<Item = (K, V)>,
    K: Display,
    V: CountValue,
{
    let converted = convert_all(counts)?;

    let mut best: Option<(String, f64)> = None;
    for (state, count) in converted {
        // strict `>` keeps the first maximum
        if best.as_ref().is_none_or(|&(_, max)| count > max) {
            best = Some((state, count));
        }
    }

    let (state, count) = best.ok_or(CountsError::EmptyCounts)?;
    debug!(state = %state, count, "selected most likely state");
    Ok(state)
}

/// Returns all `(state, count)` pairs ordered by count, highest first.
///
/// Ties keep their input order, so the first entry of a non-empty ranking is
/// the same state [`most_likely_state`] returns. Empty input gives an empty
/// ranking.
///
/// # Errors
///
/// - [`CountsError::Conversion`] if a count is not numeric.
/// - [`CountsError::NanCount`] if a count is NaN.
#[tracing::instrument(skip_all)]
pub fn ranked_states<I, K, V>(counts: I) -> Result<Vec<(String, f64)>, CountsError>
where
    I: IntoIterator<Item = (K, V)>,
    K: Display,
    V: CountValue,
{
    let mut ranked = convert_all(counts)?;
    // NaN is rejected above, so total_cmp agrees with the numeric order
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    debug!(n_states = ranked.len(), "ranked states");
    Ok(ranked)
}
