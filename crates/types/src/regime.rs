//! Market regime: the directional bias and volatility magnitude applied to
//! synthetic price evolution.

use serde::{Deserialize, Serialize};

/// The market regime driving the live price stream.
///
/// A regime is replaced wholesale on every switch and readers take `Copy`
/// snapshots, so a half-updated regime can never be observed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketRegime {
    /// Bullish bias: regime drift is added when true, subtracted when false.
    pub is_bull: bool,
    /// Volatility magnitude in USD, scaling both the wave component and the
    /// regime drift.
    pub volatility: f64,
}

impl MarketRegime {
    /// Bull regime with the given volatility.
    pub fn bull(volatility: f64) -> Self {
        Self {
            is_bull: true,
            volatility,
        }
    }

    /// Bear regime with the given volatility.
    pub fn bear(volatility: f64) -> Self {
        Self {
            is_bull: false,
            volatility,
        }
    }
}

impl Default for MarketRegime {
    /// Reference starting regime: bull market at volatility 5000.
    fn default() -> Self {
        Self::bull(5000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_regime() {
        let regime = MarketRegime::default();
        assert!(regime.is_bull);
        assert_eq!(regime.volatility, 5000.0);
    }

    #[test]
    fn test_constructors() {
        assert!(MarketRegime::bull(100.0).is_bull);
        assert!(!MarketRegime::bear(100.0).is_bull);
    }
}
