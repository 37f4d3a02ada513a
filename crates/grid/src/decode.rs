//! Binary state parsing and grid coordinate decoding.

use tracing::debug;

use crate::config::GridConfig;
use crate::coord::GridCoord;
use crate::error::GridError;

/// Parses a string of `'0'`/`'1'` characters as a base-2 integer.
///
/// Leading zeros are allowed in any number.
///
/// # Errors
///
/// - [`GridError::EmptyState`] if `state` is empty.
/// - [`GridError::InvalidDigit`] for the first character that is not a binary digit.
/// - [`GridError::Overflow`] if the value exceeds `u128::MAX`.
pub fn parse_binary_state(state: &str) -> Result<u128, GridError> {
    if state.is_empty() {
        return Err(GridError::EmptyState);
    }

    let mut value: u128 = 0;
    let mut overflowed = false;
    for (position, digit) in state.chars().enumerate() {
        let bit = match digit {
            '0' => 0,
            '1' => 1,
            _ => return Err(GridError::InvalidDigit { digit, position }),
        };
        // keep scanning after overflow so a bad digit is still reported first
        if !overflowed {
            match value.checked_mul(2).and_then(|v| v.checked_add(bit)) {
                Some(v) => value = v,
                None => overflowed = true,
            }
        }
    }

    if overflowed {
        return Err(GridError::Overflow {
            len: state.chars().count(),
        });
    }
    Ok(value)
}

/// Decodes a binary state into coordinates on the default 3-column grid.
///
/// Returns `(value / 3, value % 3)` where `value` is the base-2 reading of
/// `state`. No row bound is checked.
///
/// # Errors
///
/// See [`parse_binary_state`].
///
/// # Example
///
/// ```
/// use gridstate_grid::{GridCoord, bin_state_to_grid_coordinates};
///
/// assert_eq!(bin_state_to_grid_coordinates("000").unwrap(), GridCoord::new(0, 0));
/// assert_eq!(bin_state_to_grid_coordinates("101").unwrap(), GridCoord::new(1, 2));
/// ```
pub fn bin_state_to_grid_coordinates(state: &str) -> Result<GridCoord, GridError> {
    bin_state_to_grid_coordinates_with(state, &GridConfig::default())
}

/// Decodes a binary state into coordinates on a grid `config.columns()` wide.
///
/// # Errors
///
/// - [`GridError::InvalidColumns`] / [`GridError::InvalidRows`] if `config` is invalid.
/// - Any error from [`parse_binary_state`].
#[tracing::instrument(skip(config), fields(columns = config.columns()))]
pub fn bin_state_to_grid_coordinates_with(
    state: &str,
    config: &GridConfig,
) -> Result<GridCoord, GridError> {
    config.validate()?;
    let value = parse_binary_state(state)?;

    let coord = GridCoord::from_index(value, config.columns())?;
    debug!(value = %value, %coord, "decoded binary state");
    Ok(coord)
}
