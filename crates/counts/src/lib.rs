//! Most-likely state selection over discrete-state occurrence counts.
//!
//! Counts arrive as any iterable of `(state, count)` pairs. States are
//! rendered with [`Display`](std::fmt::Display) and counts are converted to
//! `f64` through [`CountValue`]. Iteration order is the tie-break order, so
//! pass an order-preserving container when ties matter.
//!
//! # Quick start
//!
//! ```
//! use gridstate_counts::most_likely_state;
//!
//! let counts = [("00", 1), ("01", 5), ("10", 5)];
//! assert_eq!(most_likely_state(counts).unwrap(), "01");
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `value` | [`CountValue`] conversion to `f64` |
//! | `select` | [`most_likely_state`] and [`ranked_states`] |
//! | `error` | Error types |

mod error;
mod select;
mod value;

pub use error::CountsError;
pub use select::{most_likely_state, ranked_states};
pub use value::CountValue;
