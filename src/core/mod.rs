//! Core pipeline: samples -> correlations -> (topology, energy) -> anneal -> report.

pub mod anneal;
pub mod correlation;
pub mod energy;
pub mod multistart;
pub mod report;
pub mod samples;
pub mod topology;
