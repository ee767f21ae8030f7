//! Parallel restarts: K independent searches, keep the best.
//!
//! Each worker owns its permutation, energy, and rng; nothing is shared
//! during the search. The only synchronization is the final fan-in over
//! the channel, where the lowest-energy outcome wins (ties broken by
//! worker index, so the result is deterministic for a given base seed).

use std::thread;

use crossbeam_channel::unbounded;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::core::anneal::{anneal, AnnealOutcome, AnnealParams};
use crate::core::energy::EnergyFunction;
use crate::error::ConfigError;

/// Run `restarts` independent searches seeded `base_seed + k` and return
/// the best outcome.
pub fn run(
    energy: &EnergyFunction,
    params: &AnnealParams,
    base_seed: u64,
    restarts: usize,
) -> Result<AnnealOutcome, ConfigError> {
    if restarts < 1 {
        return Err(ConfigError::NoRestarts);
    }
    if restarts == 1 {
        let mut rng = StdRng::seed_from_u64(base_seed);
        return anneal(energy, params, &mut rng);
    }

    let (tx, rx) = unbounded();
    thread::scope(|scope| {
        for k in 0..restarts {
            let tx = tx.clone();
            scope.spawn(move || {
                let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(k as u64));
                let outcome = anneal(energy, params, &mut rng);
                let _ = tx.send((k, outcome));
            });
        }
    });
    drop(tx);

    let mut results: Vec<(usize, Result<AnnealOutcome, ConfigError>)> = rx.iter().collect();
    results.sort_by_key(|(k, _)| *k);

    let mut best: Option<AnnealOutcome> = None;
    for (k, result) in results {
        let outcome = result?;
        debug!(worker = k, energy = outcome.energy, "restart finished");
        match &best {
            Some(b) if b.energy <= outcome.energy => {}
            _ => best = Some(outcome),
        }
    }
    // restarts >= 2 here, so at least one outcome arrived.
    Ok(best.expect("no worker produced a result"))
}
