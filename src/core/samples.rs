//! Loading the sampled feature-extractor outputs.
//!
//! The table is plain delimited text: one row per captured frame, one
//! column per NN output channel. It is read fully into memory; expected
//! scale is thousands of rows by hundreds of columns.

use std::fs;
use std::path::Path;

use crate::error::{DataError, RunError};

/// N samples x D channels, row-major, immutable once loaded.
#[derive(Debug, Clone)]
pub struct SampleMatrix {
    rows: usize,
    channels: usize,
    values: Vec<f64>,
}

impl SampleMatrix {
    /// Read and parse a delimited text table.
    pub fn load(path: &Path, delimiter: char) -> Result<Self, RunError> {
        let text = fs::read_to_string(path).map_err(|e| RunError::io(path, e))?;
        Ok(Self::parse(&text, delimiter)?)
    }

    /// Parse table text. Blank lines are skipped; every data row must
    /// have the same width as the first.
    pub fn parse(text: &str, delimiter: char) -> Result<Self, DataError> {
        let mut channels = 0usize;
        let mut rows = 0usize;
        let mut values = Vec::new();

        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            if raw.trim().is_empty() {
                continue;
            }
            let start = values.len();
            for (col, field) in raw.split(delimiter).enumerate() {
                let v: f64 =
                    field
                        .trim()
                        .parse()
                        .map_err(|_| DataError::NonNumeric {
                            line,
                            col,
                            value: field.trim().to_string(),
                        })?;
                if !v.is_finite() {
                    return Err(DataError::NonFinite { line, col });
                }
                values.push(v);
            }
            let got = values.len() - start;
            if rows == 0 {
                channels = got;
            } else if got != channels {
                return Err(DataError::RaggedRow {
                    line,
                    got,
                    expected: channels,
                });
            }
            rows += 1;
        }

        if rows == 0 {
            return Err(DataError::Empty);
        }
        if rows < 2 {
            return Err(DataError::TooFewRows { rows });
        }
        if channels < 2 {
            return Err(DataError::TooFewChannels { channels });
        }
        Ok(Self {
            rows,
            channels,
            values,
        })
    }

    /// Build directly from rows (used by tests and synthetic inputs).
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, DataError> {
        if rows.is_empty() {
            return Err(DataError::Empty);
        }
        let channels = rows[0].len();
        let mut values = Vec::with_capacity(rows.len() * channels);
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != channels {
                return Err(DataError::RaggedRow {
                    line: idx + 1,
                    got: row.len(),
                    expected: channels,
                });
            }
            values.extend_from_slice(row);
        }
        if rows.len() < 2 {
            return Err(DataError::TooFewRows { rows: rows.len() });
        }
        if channels < 2 {
            return Err(DataError::TooFewChannels { channels });
        }
        Ok(Self {
            rows: rows.len(),
            channels,
            values,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    #[inline]
    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.channels + col]
    }
}
