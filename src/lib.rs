//! Correlation-driven channel reordering for an LED matrix.
//!
//! A neural feature extractor produces D output channels per frame; the
//! matrix shows one channel per LED. This crate computes pairwise Pearson
//! correlations between channels from a sampled output table and searches,
//! by simulated annealing, for a channel-to-position assignment that puts
//! strongly correlated channels on adjacent LEDs. The resulting order file
//! is consumed by the device-side remapper at display time.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
