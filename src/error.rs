//! Error types for the layout pipeline.
//!
//! Data and configuration problems are fatal before the search starts;
//! io problems can also occur at the very end when results are written.

use std::path::PathBuf;

use thiserror::Error;

/// Malformed or degenerate sample input.
#[derive(Debug, Error)]
pub enum DataError {
    /// The sample table has no rows.
    #[error("sample table is empty")]
    Empty,

    /// Pearson correlation needs at least two observations.
    #[error("need at least 2 sample rows, got {rows}")]
    TooFewRows { rows: usize },

    /// Reordering a single channel is meaningless.
    #[error("need at least 2 channels, got {channels}")]
    TooFewChannels { channels: usize },

    /// A row's width disagrees with the first row.
    #[error("line {line}: row has {got} values, expected {expected}")]
    RaggedRow {
        line: usize,
        got: usize,
        expected: usize,
    },

    /// A cell failed to parse as a number.
    #[error("line {line}, column {col}: cannot parse {value:?} as a number")]
    NonNumeric {
        line: usize,
        col: usize,
        value: String,
    },

    /// A cell parsed but is NaN or infinite.
    #[error("line {line}, column {col}: non-finite value")]
    NonFinite { line: usize, col: usize },

    /// A constant column has undefined correlations; refuse it rather
    /// than let NaN reach the search.
    #[error("column {col} is constant; its correlations are undefined")]
    ConstantColumn { col: usize },
}

/// Invalid search or topology configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No swap move exists with fewer than two positions.
    #[error("need at least 2 channels to search, got {channels}")]
    TooFewChannels { channels: usize },

    /// The step budget must allow at least one move.
    #[error("step budget must be at least 1")]
    NoSteps,

    /// Both schedule endpoints must be positive.
    #[error("temperature schedule endpoints must be positive")]
    BadSchedule,

    /// The progress report interval cannot be zero.
    #[error("log interval must be at least 1")]
    NoLogInterval,

    /// A grid topology needs explicit dimensions.
    #[error("--topology grid requires --{name}")]
    MissingGridDimension { name: &'static str },

    /// Grid position count must equal the channel count.
    #[error(
        "grid {height}x{width}x{planes} holds {positions} positions \
         but the data has {channels} channels"
    )]
    GridMismatch {
        height: usize,
        width: usize,
        planes: usize,
        positions: usize,
        channels: usize,
    },

    /// At least one search run is required.
    #[error("restart count must be at least 1")]
    NoRestarts,
}

/// Top-level failure of a pipeline run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RunError {
    /// Attach the offending path to an io error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
