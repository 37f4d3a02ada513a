//! # gridstate-grid
//!
//! Decoding of binary state strings into coordinates on a fixed-width grid.
//!
//! A state such as `"101"` is read as the base-2 integer 5 and laid out
//! row-major on a grid of [`GRID_COLUMNS`] columns, giving row `5 / 3 = 1`
//! and column `5 % 3 = 2`.
//!
//! ## Quick Start
//!
//! ```
//! use gridstate_grid::{GridConfig, GridCoord, bin_state_to_grid_coordinates,
//!     bin_state_to_grid_coordinates_with};
//!
//! let coord = bin_state_to_grid_coordinates("101").unwrap();
//! assert_eq!(coord, GridCoord::new(1, 2));
//!
//! let wide = GridConfig::new().with_columns(4);
//! let coord = bin_state_to_grid_coordinates_with("111", &wide).unwrap();
//! assert_eq!(coord.into_tuple(), (1, 3));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `decode` | Binary parsing and coordinate decoding |
//! | `coord` | Row/column coordinate type |
//! | `config` | Grid width and optional row bound |
//! | `error` | Error types |

mod config;
mod coord;
mod decode;
mod error;

pub use config::{GRID_COLUMNS, GridConfig};
pub use coord::GridCoord;
pub use decode::{
    bin_state_to_grid_coordinates, bin_state_to_grid_coordinates_with, parse_binary_state,
};
pub use error::GridError;
