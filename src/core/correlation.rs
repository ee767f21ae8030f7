//! Pairwise Pearson correlation between sampled channels.
//!
//! Computed once per run, then read on every energy evaluation; the
//! search never mutates it.

use crate::core::samples::SampleMatrix;
use crate::error::DataError;

/// D x D symmetric correlation matrix with unit diagonal.
#[derive(Debug, Clone)]
pub struct CorrelationMatrix {
    channels: usize,
    values: Vec<f64>,
}

impl CorrelationMatrix {
    /// Compute Pearson correlations across the columns of `samples`.
    ///
    /// A column with zero variance would put NaN in the matrix; it is
    /// rejected up front as [`DataError::ConstantColumn`].
    pub fn from_samples(samples: &SampleMatrix) -> Result<Self, DataError> {
        let n = samples.rows();
        let d = samples.channels();
        if n < 2 {
            return Err(DataError::TooFewRows { rows: n });
        }
        if d < 2 {
            return Err(DataError::TooFewChannels { channels: d });
        }

        let mut means = vec![0.0f64; d];
        for r in 0..n {
            for c in 0..d {
                means[c] += samples.value(r, c);
            }
        }
        for m in &mut means {
            *m /= n as f64;
        }

        // Centered copy plus per-column norms.
        let mut centered = vec![0.0f64; n * d];
        let mut norms = vec![0.0f64; d];
        for r in 0..n {
            for c in 0..d {
                let v = samples.value(r, c) - means[c];
                centered[r * d + c] = v;
                norms[c] += v * v;
            }
        }
        for (c, ssq) in norms.iter_mut().enumerate() {
            if *ssq == 0.0 {
                return Err(DataError::ConstantColumn { col: c });
            }
            *ssq = ssq.sqrt();
        }

        let mut values = vec![0.0f64; d * d];
        for i in 0..d {
            values[i * d + i] = 1.0;
            for j in (i + 1)..d {
                let mut dot = 0.0;
                for r in 0..n {
                    dot += centered[r * d + i] * centered[r * d + j];
                }
                // Rounding can push |r| a hair past 1.
                let r = (dot / (norms[i] * norms[j])).clamp(-1.0, 1.0);
                values[i * d + j] = r;
                values[j * d + i] = r;
            }
        }
        Ok(Self {
            channels: d,
            values,
        })
    }

    /// Build from raw row-major values; lets tests and callers with a
    /// precomputed matrix drive the optimizer directly.
    ///
    /// Panics if the shape is wrong, the matrix is not symmetric with a
    /// unit diagonal, or any entry falls outside [-1, 1].
    pub fn from_values(channels: usize, values: Vec<f64>) -> Self {
        assert!(channels >= 2, "need at least 2 channels");
        assert_eq!(values.len(), channels * channels, "shape mismatch");
        for i in 0..channels {
            assert_eq!(values[i * channels + i], 1.0, "diagonal must be 1.0");
            for j in 0..channels {
                let v = values[i * channels + j];
                assert!((-1.0..=1.0).contains(&v), "entry out of [-1,1]");
                assert_eq!(v, values[j * channels + i], "matrix must be symmetric");
            }
        }
        Self { channels, values }
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.channels + j]
    }

    /// All D*(D-1)/2 unique off-diagonal values, ascending. Written out
    /// as a diagnostic so the correlation distribution can be eyeballed.
    pub fn sorted_pairs(&self) -> Vec<f64> {
        let d = self.channels;
        let mut out = Vec::with_capacity(d * (d - 1) / 2);
        for i in 0..d {
            for j in (i + 1)..d {
                out.push(self.get(i, j));
            }
        }
        out.sort_by(f64::total_cmp);
        out
    }
}
