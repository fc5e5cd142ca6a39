//! Configuration types for the price-path generators.
//!
//! All tunable constants of the engine are defined here; `Default` impls
//! carry the reference behavior of the chart application.

use serde::{Deserialize, Serialize};

// =============================================================================
// StreamConfig
// =============================================================================

/// Configuration for the live price stream.
///
/// The stream evolves as `base + sin(index / period) * volatility + noise`,
/// shifted by a regime drift and clamped into a band derived from the base
/// price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamConfig {
    /// Number of samples the rolling window holds.
    pub capacity: usize,

    /// Upper bound of the uniform noise added to every sample (USD).
    pub noise_amplitude: f64,

    // ─── Price Band ────────────────────────────────────────────────────────
    /// Lower clamp as a fraction of the base price.
    pub floor_factor: f64,

    /// Upper clamp as a fraction of the base price.
    pub ceiling_factor: f64,

    // ─── Wave Shape ────────────────────────────────────────────────────────
    /// Sine period divisor used when seeding the initial window.
    pub seed_wave_period: f64,

    /// Sine period divisor used for per-tick advances.
    pub wave_period: f64,

    /// Regime drift as a fraction of the regime volatility, added in a bull
    /// market and subtracted in a bear market.
    pub drift_factor: f64,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            capacity: 1000,
            noise_amplitude: 1000.0,
            floor_factor: 0.5,
            ceiling_factor: 2.0,
            seed_wave_period: 100.0,
            wave_period: 50.0,
            drift_factor: 0.5,
        }
    }
}

impl StreamConfig {
    /// Set the window capacity.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the uniform noise amplitude.
    pub fn with_noise_amplitude(mut self, amplitude: f64) -> Self {
        self.noise_amplitude = amplitude;
        self
    }
}

// =============================================================================
// RegimeConfig
// =============================================================================

/// Configuration for random regime switches.
///
/// On each switch the new regime is drawn independently of the old one:
/// bull with `bull_probability`, volatility uniform in
/// `[base_volatility, base_volatility + volatility_range)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegimeConfig {
    /// Probability that a switch lands in a bull regime.
    pub bull_probability: f64,

    /// Minimum volatility of a freshly drawn regime (USD).
    pub base_volatility: f64,

    /// Width of the uniform volatility draw above the base (USD).
    pub volatility_range: f64,
}

impl Default for RegimeConfig {
    fn default() -> Self {
        Self {
            bull_probability: 0.5,
            base_volatility: 3000.0,
            volatility_range: 5000.0,
        }
    }
}

// =============================================================================
// SimulationConfig
// =============================================================================

/// Configuration for one Monte Carlo simulation run.
///
/// Immutable per run; the simulator rejects zero `steps`, zero
/// `path_count`, and a start price that is not positive and finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Steps per path.
    pub steps: usize,

    /// Number of independent paths.
    pub path_count: usize,

    /// Price every path starts from (USD).
    pub start_price: f64,

    /// Per-step volatility as a fraction of the start price. The maximum
    /// single-step move is `volatility * start_price`.
    pub volatility: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            steps: 100,
            path_count: 50,
            start_price: 1000.0,
            volatility: 0.05,
        }
    }
}

impl SimulationConfig {
    /// Create a config starting from the given price, with reference
    /// defaults for everything else.
    pub fn new(start_price: f64) -> Self {
        Self {
            start_price,
            ..Default::default()
        }
    }

    /// Set the steps per path.
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    /// Set the path count.
    pub fn with_path_count(mut self, path_count: usize) -> Self {
        self.path_count = path_count;
        self
    }

    /// Set the per-step volatility fraction.
    pub fn with_volatility(mut self, volatility: f64) -> Self {
        self.volatility = volatility;
        self
    }

    /// Largest possible single-step price move.
    pub fn max_step_delta(&self) -> f64 {
        self.volatility * self.start_price
    }
}

// =============================================================================
// Tests
// =============================================================================
