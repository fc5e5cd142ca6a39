//! Live price stream: a rolling window of synthetic prices advanced one
//! tick at a time.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use types::{MarketRegime, PricePoint, StreamConfig};

use crate::validator::validate_price;
use crate::window::PriceWindow;

/// Generates the continuously-evolving price window behind the live chart.
///
/// The simulator defines only the per-tick transformation. Scheduling
/// (reference: one [`advance`] every 500 ms) belongs to the caller, which
/// must also serialize `advance` calls for any one window — single-writer
/// discipline.
///
/// Every produced value passes through [`validate_price`] with a band of
/// `[base * floor_factor, base * ceiling_factor]` and the base price as the
/// fallback. A base price of 0 collapses the band to `[0, 0]` and yields a
/// flat stream, which is degenerate but valid.
///
/// [`advance`]: LiveStreamSimulator::advance
pub struct LiveStreamSimulator {
    config: StreamConfig,
    base_price: f64,
    floor: f64,
    ceiling: f64,
    rng: StdRng,
}

impl LiveStreamSimulator {
    /// Create a simulator seeded from the OS.
    pub fn new(base_price: f64, config: StreamConfig) -> Self {
        Self::build(base_price, config, StdRng::from_os_rng())
    }

    /// Create a simulator with a specific seed (for reproducible testing).
    pub fn with_seed(base_price: f64, config: StreamConfig, seed: u64) -> Self {
        Self::build(base_price, config, StdRng::seed_from_u64(seed))
    }

    fn build(base_price: f64, config: StreamConfig, rng: StdRng) -> Self {
        let floor = base_price * config.floor_factor;
        let ceiling = base_price * config.ceiling_factor;
        Self {
            config,
            base_price,
            floor,
            ceiling,
            rng,
        }
    }

    /// Base price the stream oscillates around.
    #[inline]
    pub fn base_price(&self) -> f64 {
        self.base_price
    }

    /// Seed a full window of `capacity` samples.
    ///
    /// Sample `i` starts from `base + sin(i / seed_wave_period) * volatility`
    /// plus uniform noise, then passes through the validator. The result is
    /// a full replacement, independent of any previous window.
    pub fn initialize(&mut self, regime: MarketRegime) -> PriceWindow {
        let mut window = PriceWindow::new(self.config.capacity);
        for i in 0..self.config.capacity as u64 {
            let wave = (i as f64 / self.config.seed_wave_period).sin() * regime.volatility;
            let raw = self.base_price + wave + self.noise();
            window.push(PricePoint::new(i, self.validated(raw)));
        }
        window
    }

    /// Advance the window by one tick under `regime`.
    ///
    /// The next index is derived from the window's newest sample, so
    /// indices can never skip or repeat no matter how many timer ticks the
    /// caller drops. At capacity the oldest sample is evicted. Returns the
    /// appended sample.
    pub fn advance(&mut self, window: &mut PriceWindow, regime: MarketRegime) -> PricePoint {
        let index = window.next_index();
        let wave = (index as f64 / self.config.wave_period).sin() * regime.volatility;
        let drift = regime.volatility * self.config.drift_factor;
        let delta = wave + self.noise();
        let change = if regime.is_bull {
            delta + drift
        } else {
            delta - drift
        };
        let point = PricePoint::new(index, self.validated(self.base_price + change));
        window.push(point);
        point
    }

    fn noise(&mut self) -> f64 {
        if self.config.noise_amplitude > 0.0 {
            self.rng.random_range(0.0..self.config.noise_amplitude)
        } else {
            0.0
        }
    }

    fn validated(&self, raw: f64) -> f64 {
        validate_price(raw, self.floor, self.ceiling, self.base_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_fills_window() {
        let mut stream = LiveStreamSimulator::with_seed(30000.0, StreamConfig::default(), 42);
        let window = stream.initialize(MarketRegime::default());

        assert_eq!(window.len(), 1000);
        assert!(window.is_full());
        assert_eq!(window.oldest().unwrap().index, 0);
        assert_eq!(window.newest().unwrap().index, 999);
        assert_eq!(window.next_index(), 1000);
    }

    #[test]
    fn test_initialize_respects_band() {
        let mut stream = LiveStreamSimulator::with_seed(30000.0, StreamConfig::default(), 7);
        let window = stream.initialize(MarketRegime::bull(5000.0));

        for point in window.iter() {
            assert!(point.value >= 15000.0, "below floor: {}", point.value);
            assert!(point.value <= 60000.0, "above ceiling: {}", point.value);
        }
    }

    #[test]
    fn test_initialize_replaces_rather_than_appends() {
        let mut stream = LiveStreamSimulator::with_seed(30000.0, StreamConfig::default(), 7);
        let first = stream.initialize(MarketRegime::default());
        let second = stream.initialize(MarketRegime::default());

        // A re-seed starts over at index 0 regardless of prior state.
        assert_eq!(second.len(), first.len());
        assert_eq!(second.oldest().unwrap().index, 0);
    }

    #[test]
    fn test_advance_keeps_indices_contiguous() {
        let mut stream = LiveStreamSimulator::with_seed(30000.0, StreamConfig::default(), 11);
        let mut window = stream.initialize(MarketRegime::default());

        for expected in 1000..1100 {
            let point = stream.advance(&mut window, MarketRegime::default());
            assert_eq!(point.index, expected);
            assert_eq!(window.len(), 1000);
            assert_eq!(window.newest().unwrap().index, expected);
            assert_eq!(window.oldest().unwrap().index, expected - 999);
        }
    }

    #[test]
    fn test_regime_drift_direction() {
        // No noise and a tiny volatility keep both values inside the band,
        // so the bull/bear difference is exactly twice the drift.
        let config = StreamConfig::default().with_noise_amplitude(0.0);
        let volatility = 100.0;

        let mut bull_stream = LiveStreamSimulator::with_seed(30000.0, config.clone(), 5);
        let mut bull_window = bull_stream.initialize(MarketRegime::bull(volatility));
        let bull = bull_stream.advance(&mut bull_window, MarketRegime::bull(volatility));

        let mut bear_stream = LiveStreamSimulator::with_seed(30000.0, config, 5);
        let mut bear_window = bear_stream.initialize(MarketRegime::bear(volatility));
        let bear = bear_stream.advance(&mut bear_window, MarketRegime::bear(volatility));

        assert!((bull.value - bear.value - volatility).abs() < 1e-9);
    }

    #[test]
    fn test_zero_base_price_is_degenerate_but_valid() {
        let mut stream = LiveStreamSimulator::with_seed(0.0, StreamConfig::default(), 13);
        let mut window = stream.initialize(MarketRegime::default());

        let point = stream.advance(&mut window, MarketRegime::default());
        assert_eq!(point.value, 0.0);
        assert!(window.iter().all(|p| p.value == 0.0));
    }

    #[test]
    fn test_seeded_streams_are_reproducible() {
        let config = StreamConfig::default().with_capacity(50);
        let regime = MarketRegime::default();

        let mut a = LiveStreamSimulator::with_seed(30000.0, config.clone(), 21);
        let mut b = LiveStreamSimulator::with_seed(30000.0, config, 21);
        let mut wa = a.initialize(regime);
        let mut wb = b.initialize(regime);

        assert_eq!(wa.values(), wb.values());
        for _ in 0..100 {
            assert_eq!(a.advance(&mut wa, regime), b.advance(&mut wb, regime));
        }
    }
}
