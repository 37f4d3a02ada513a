//! Error types for the gridstate-counts crate.

/// Error type for all fallible operations in the gridstate-counts crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CountsError {
    /// Returned when the count mapping has no entries.
    #[error("counts are empty: no most likely state exists")]
    EmptyCounts,

    /// Returned when a count cannot be converted to a floating-point value.
    #[error("count for state {state:?} is not numeric: {value:?}")]
    Conversion {
        /// The state whose count failed to convert.
        state: String,
        /// Text of the offending count.
        value: String,
    },

    /// Returned when a count converts to NaN.
    #[error("count for state {state:?} is NaN")]
    NanCount {
        /// The state whose count is NaN.
        state: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_empty_counts() {
        let e = CountsError::EmptyCounts;
        assert_eq!(e.to_string(), "counts are empty: no most likely state exists");
    }

    #[test]
    fn error_conversion() {
        let e = CountsError::Conversion {
            state: "01".to_string(),
            value: "many".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "count for state \"01\" is not numeric: \"many\""
        );
    }

    #[test]
    fn error_nan_count() {
        let e = CountsError::NanCount {
            state: "11".to_string(),
        };
        assert_eq!(e.to_string(), "count for state \"11\" is NaN");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CountsError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CountsError>();
    }
}
