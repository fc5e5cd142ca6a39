//! Monte Carlo forward-price simulation.
//!
//! Produces batches of independent random walks from a starting price, for
//! the "predict future price" chart. The walks are illustrative uniform
//! steps, not a calibrated financial model.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use types::{PricePoint, SimulationConfig};

use crate::error::{Result, SimCoreError};

// =============================================================================
// SimulationResult
// =============================================================================

/// A batch of independent forward price paths.
///
/// Always complete: `path_count` paths of `steps` points each. Invalid
/// configs are rejected before any path is generated, so a partial batch
/// can never be observed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    paths: Vec<Vec<PricePoint>>,
}

impl SimulationResult {
    /// All paths, in generation order.
    pub fn paths(&self) -> &[Vec<PricePoint>] {
        &self.paths
    }

    /// Number of paths in the batch.
    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// Steps per path.
    pub fn steps(&self) -> usize {
        self.paths.first().map_or(0, Vec::len)
    }

    /// Final price of every path, in path order.
    pub fn terminal_prices(&self) -> Vec<f64> {
        self.paths
            .iter()
            .filter_map(|path| path.last())
            .map(|p| p.value)
            .collect()
    }
}

// =============================================================================
// MonteCarloSimulator
// =============================================================================

/// Batch generator of independent forward price paths.
///
/// The master RNG is only used to draw one seed per path; each path then
/// walks its own `StdRng`. That keeps paths statistically independent,
/// reproducible in isolation, and safe to generate in parallel without
/// shared random state. Each run draws fresh seeds, so results never carry
/// over between invocations.
pub struct MonteCarloSimulator {
    rng: StdRng,
}

impl MonteCarloSimulator {
    /// Create a simulator seeded from the OS.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a simulator with a specific seed (for reproducible testing).
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Run one simulation batch.
    ///
    /// # Errors
    ///
    /// Fails fast with [`SimCoreError`] on zero `steps`, zero `path_count`,
    /// or a start price that is not positive and finite. No partial result
    /// is ever returned.
    pub fn run(&mut self, config: &SimulationConfig) -> Result<SimulationResult> {
        if config.steps == 0 {
            return Err(SimCoreError::ZeroSteps);
        }
        if config.path_count == 0 {
            return Err(SimCoreError::ZeroPaths);
        }
        if !config.start_price.is_finite() || config.start_price <= 0.0 {
            return Err(SimCoreError::InvalidStartPrice(config.start_price));
        }

        // Seeds are drawn up front so sequential and parallel runs of the
        // same master seed produce identical batches.
        let seeds: Vec<u64> = (0..config.path_count).map(|_| self.rng.random()).collect();

        #[cfg(feature = "parallel")]
        let paths = seeds.par_iter().map(|&seed| walk_path(config, seed)).collect();

        #[cfg(not(feature = "parallel"))]
        let paths = seeds.iter().map(|&seed| walk_path(config, seed)).collect();

        Ok(SimulationResult { paths })
    }
}

impl Default for MonteCarloSimulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Walk a single path from the configured start price.
///
/// Each step moves by `U(0,1) * volatility * start_price`, direction chosen
/// by a second independent uniform draw, floored at zero. Forward paths
/// deliberately carry no upper clamp: a prediction may leave the historical
/// band the live stream is confined to.
fn walk_path(config: &SimulationConfig, seed: u64) -> Vec<PricePoint> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut price = config.start_price;
    let mut path = Vec::with_capacity(config.steps);
    for step in 0..config.steps {
        let magnitude: f64 = rng.random();
        let direction = if rng.random::<f64>() > 0.5 { 1.0 } else { -1.0 };
        let delta = magnitude * config.volatility * config.start_price * direction;
        price = (price + delta).max(0.0);
        path.push(PricePoint::new(step as u64, price));
    }
    path
}
