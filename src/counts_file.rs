//! Loading state counts from a TOML file.
//!
//! The file is a flat table of `state = count` pairs. Key order in the file
//! is preserved, which makes it the tie-break order for
//! [`gridstate_counts::most_likely_state`].

use std::num::ParseFloatError;
use std::path::Path;

use anyhow::{Context, Result};
use gridstate_counts::CountValue;
use tracing::debug;

/// A count as written in the counts file.
///
/// Booleans count as 0 or 1. Arrays, tables and datetimes are kept as their
/// TOML text so that conversion fails in [`CountValue::to_count`] and names the
/// state.
#[derive(Debug, Clone, PartialEq)]
pub enum RawCount {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Text(String),
}

impl From<toml::Value> for RawCount {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::Integer(i) => Self::Integer(i),
            toml::Value::Float(f) => Self::Float(f),
            toml::Value::String(s) => Self::Text(s),
            toml::Value::Boolean(b) => Self::Boolean(b),
            other => Self::Text(other.to_string()),
        }
    }
}

impl CountValue for RawCount {
    fn to_count(&self) -> Result<f64, ParseFloatError> {
        match self {
            Self::Integer(i) => i.to_count(),
            Self::Float(f) => f.to_count(),
            Self::Boolean(b) => b.to_count(),
            Self::Text(s) => s.to_count(),
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Integer(i) => i.describe(),
            Self::Float(f) => f.describe(),
            Self::Boolean(b) => b.describe(),
            Self::Text(s) => s.describe(),
        }
    }
}

/// Parses counts file contents into `(state, count)` pairs in file order.
pub fn parse_counts(contents: &str) -> Result<Vec<(String, RawCount)>> {
    let table: toml::Table = toml::from_str(contents).context("failed to parse TOML counts")?;
    Ok(table
        .into_iter()
        .map(|(state, value)| (state, RawCount::from(value)))
        .collect())
}

/// Reads and parses the counts file at `path`.
pub fn read_counts(path: &Path) -> Result<Vec<(String, RawCount)>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read counts file: {}", path.display()))?;
    let counts = parse_counts(&contents)
        .with_context(|| format!("invalid counts file: {}", path.display()))?;
    debug!(path = %path.display(), n_states = counts.len(), "counts loaded");
    Ok(counts)
}
