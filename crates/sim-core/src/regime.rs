//! Regime controller: switches the market between bull and bear on an
//! external timer.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use types::{MarketRegime, RegimeConfig};

/// Two-state (bull/bear) regime machine with random transitions.
///
/// Every transition is valid, including a regime replacing itself, and the
/// regime is replaced wholesale on each switch. The switch cadence
/// (reference: every 10 s) is owned by the hosting runtime, which calls
/// [`RegimeController::switch`] from its timer; there is no terminal state.
pub struct RegimeController {
    config: RegimeConfig,
    regime: MarketRegime,
    rng: StdRng,
}

impl RegimeController {
    /// Create a controller seeded from the OS, starting in the reference
    /// regime (bull at volatility 5000).
    pub fn new(config: RegimeConfig) -> Self {
        Self {
            config,
            regime: MarketRegime::default(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a controller with a specific seed (for reproducible testing).
    pub fn with_seed(config: RegimeConfig, seed: u64) -> Self {
        Self {
            config,
            regime: MarketRegime::default(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Snapshot of the active regime.
    #[inline]
    pub fn current(&self) -> MarketRegime {
        self.regime
    }

    /// Draw and install a fresh regime, independent of the current one.
    ///
    /// Bull with `bull_probability`; volatility uniform in
    /// `[base_volatility, base_volatility + volatility_range)`.
    pub fn switch(&mut self) -> MarketRegime {
        let extra = if self.config.volatility_range > 0.0 {
            self.rng.random_range(0.0..self.config.volatility_range)
        } else {
            0.0
        };
        self.regime = MarketRegime {
            is_bull: self.rng.random_bool(self.config.bull_probability),
            volatility: self.config.base_volatility + extra,
        };
        self.regime
    }
}
