//! Grid layout configuration.

use crate::coord::GridCoord;
use crate::error::GridError;

/// Default number of grid columns.
pub const GRID_COLUMNS: usize = 3;

/// Layout of the grid that decoded states are placed on.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use gridstate_grid::GridConfig;
///
/// let config = GridConfig::new().with_columns(4).with_rows(Some(4));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridConfig {
    columns: usize,
    rows: Option<usize>,
}

impl GridConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `columns = 3`, `rows = None` (unbounded).
    pub fn new() -> Self {
        Self {
            columns: GRID_COLUMNS,
            rows: None,
        }
    }

    /// Sets the number of columns.
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Sets the number of rows, or `None` for an unbounded grid.
    pub fn with_rows(mut self, rows: Option<usize>) -> Self {
        self.rows = rows;
        self
    }

    /// Returns the number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the number of rows, if bounded.
    pub fn rows(&self) -> Option<usize> {
        self.rows
    }

    /// Returns `true` if `coord` lies on this grid.
    ///
    /// Decoding never checks this; callers that care about the row bound ask
    /// explicitly.
    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.col < self.columns && self.rows.is_none_or(|rows| coord.row < rows as u128)
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// - [`GridError::InvalidColumns`] if `columns` is zero.
    /// - [`GridError::InvalidRows`] if `rows` is `Some(0)`.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.columns == 0 {
            return Err(GridError::InvalidColumns {
                columns: self.columns,
            });
        }
        if let Some(0) = self.rows {
            return Err(GridError::InvalidRows { rows: 0 });
        }
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = GridConfig::new();
        assert_eq!(cfg.columns(), 3);
        assert_eq!(cfg.rows(), None);
        assert_eq!(cfg, GridConfig::default());
    }

    #[test]
    fn builder_chaining() {
        let cfg = GridConfig::new().with_columns(5).with_rows(Some(2));
        assert_eq!(cfg.columns(), 5);
        assert_eq!(cfg.rows(), Some(2));
    }

    #[test]
    fn validate_ok() {
        assert!(GridConfig::new().validate().is_ok());
        assert!(GridConfig::new().with_rows(Some(1)).validate().is_ok());
    }

    #[test]
    fn validate_zero_columns() {
        assert_eq!(
            GridConfig::new().with_columns(0).validate(),
            Err(GridError::InvalidColumns { columns: 0 })
        );
    }

    #[test]
    fn validate_zero_rows() {
        assert_eq!(
            GridConfig::new().with_rows(Some(0)).validate(),
            Err(GridError::InvalidRows { rows: 0 })
        );
    }

    #[test]
    fn contains_unbounded() {
        let cfg = GridConfig::new();
        assert!(cfg.contains(GridCoord::new(1_000, 2)));
        assert!(!cfg.contains(GridCoord::new(0, 3)));
    }

    #[test]
    fn contains_bounded() {
        let cfg = GridConfig::new().with_rows(Some(3));
        assert!(cfg.contains(GridCoord::new(2, 2)));
        assert!(!cfg.contains(GridCoord::new(3, 0)));
    }
}
