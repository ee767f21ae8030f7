//! Result files.
//!
//! Two artifacts: the sorted correlation distribution (a diagnostic for
//! picking thresholds and sanity-checking the data) and the order file
//! the device-side remapper consumes. Writes are best-effort; there is
//! no transactional guarantee across the two files.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::RunError;

/// One floating-point value per line, ascending.
pub fn write_sorted_correlations(path: &Path, values: &[f64]) -> Result<(), RunError> {
    let file = File::create(path).map_err(|e| RunError::io(path, e))?;
    let mut w = BufWriter::new(file);
    for v in values {
        writeln!(w, "{v}").map_err(|e| RunError::io(path, e))?;
    }
    w.flush().map_err(|e| RunError::io(path, e))
}

/// D lines, one channel index per line, in canonical position order.
pub fn write_order(path: &Path, order: &[usize]) -> Result<(), RunError> {
    let file = File::create(path).map_err(|e| RunError::io(path, e))?;
    let mut w = BufWriter::new(file);
    for ch in order {
        writeln!(w, "{ch}").map_err(|e| RunError::io(path, e))?;
    }
    w.flush().map_err(|e| RunError::io(path, e))
}
