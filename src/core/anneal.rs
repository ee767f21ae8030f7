//! Simulated annealing over channel orderings.
//!
//! Acceptance uses the rule `gain * temperature > draw` with draw
//! uniform in [0, 1), not the canonical Metropolis `exp(gain/T) > draw`.
//! The rule never accepts a worsening move (negative gain stays below
//! any draw); temperature only gates how small an improvement must be
//! to pass. The schedule defaults were tuned around this rule, so it is
//! kept as-is rather than corrected toward textbook annealing.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::core::energy::EnergyFunction;
use crate::error::ConfigError;

/// Search knobs. Defaults: 500k steps, temperature geometrically spaced
/// from 1e5 down to 1.
#[derive(Debug, Clone)]
pub struct AnnealParams {
    pub steps: usize,
    pub t_start: f64,
    pub t_end: f64,
    /// Progress report interval in steps.
    pub log_every: usize,
}

impl Default for AnnealParams {
    fn default() -> Self {
        Self {
            steps: 500_000,
            t_start: 1e5,
            t_end: 1.0,
            log_every: 1000,
        }
    }
}

impl AnnealParams {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.steps < 1 {
            return Err(ConfigError::NoSteps);
        }
        if self.t_start <= 0.0 || self.t_end <= 0.0 {
            return Err(ConfigError::BadSchedule);
        }
        if self.log_every < 1 {
            return Err(ConfigError::NoLogInterval);
        }
        Ok(())
    }

    /// Per-step geometric cooling factor. Endpoints are inclusive, so a
    /// single-step schedule stays at `t_start`.
    fn cooling_ratio(&self) -> f64 {
        if self.steps > 1 {
            (self.t_end / self.t_start).powf(1.0 / (self.steps - 1) as f64)
        } else {
            1.0
        }
    }
}

/// Final state of a finished search.
#[derive(Debug, Clone)]
pub struct AnnealOutcome {
    /// Channel index per position, in canonical position order.
    pub order: Vec<usize>,
    pub energy: f64,
}

/// Run one annealing search to completion.
///
/// The caller owns and seeds the rng, so identical inputs and seed give
/// an identical outcome.
pub fn anneal<R: Rng>(
    energy: &EnergyFunction,
    params: &AnnealParams,
    rng: &mut R,
) -> Result<AnnealOutcome, ConfigError> {
    params.validate()?;
    let d = energy.positions();
    if d < 2 {
        return Err(ConfigError::TooFewChannels { channels: d });
    }

    let mut order: Vec<usize> = (0..d).collect();
    order.shuffle(rng);
    let mut current = energy.full(&order);
    debug!(energy = current, "initial random order");

    let ratio = params.cooling_ratio();
    let mut temperature = params.t_start;
    for step in 0..params.steps {
        if step % params.log_every == 0 {
            debug!(step, temperature, energy = current, "annealing");
        }

        let i = rng.random_range(0..d);
        let mut j = rng.random_range(0..d);
        while j == i {
            j = rng.random_range(0..d);
        }

        let delta = energy.swap_delta(&order, i, j);
        let gain = -delta;
        let draw: f64 = rng.random();
        if gain * temperature > draw {
            order.swap(i, j);
            current += delta;
        }

        temperature *= ratio;
    }

    // Accumulated deltas drift by float rounding; report the exact sum.
    let energy = energy.full(&order);
    debug!(energy, "search terminated");
    Ok(AnnealOutcome { order, energy })
}
