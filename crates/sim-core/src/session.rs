//! Screen-scoped wiring of the live stream and the regime controller.

use types::{MarketRegime, PricePoint, RegimeConfig, StreamConfig};

use crate::chart::ChartSeries;
use crate::regime::RegimeController;
use crate::stream::LiveStreamSimulator;
use crate::window::PriceWindow;

/// Everything one chart screen owns: the stream simulator, the regime
/// controller, and the rolling window itself.
///
/// A session is created on screen entry and dropped on screen exit; nothing
/// persists across sessions. The hosting runtime drives the two timer
/// callbacks — [`advance`] per stream tick (reference: 500 ms) and
/// [`switch_regime`] per regime switch (reference: 10 s). Each callback is
/// synchronous and bounded, so stopping the timers stops the session with
/// nothing in flight.
///
/// [`advance`]: ChartSession::advance
/// [`switch_regime`]: ChartSession::switch_regime
pub struct ChartSession {
    stream: LiveStreamSimulator,
    controller: RegimeController,
    window: PriceWindow,
}

impl ChartSession {
    /// Open a session for an asset trading at `base_price`, seeding the
    /// window under the starting regime.
    pub fn new(base_price: f64, stream_config: StreamConfig, regime_config: RegimeConfig) -> Self {
        let stream = LiveStreamSimulator::new(base_price, stream_config);
        let controller = RegimeController::new(regime_config);
        Self::build(stream, controller)
    }

    /// Open a deterministic session (for reproducible testing).
    pub fn with_seed(
        base_price: f64,
        stream_config: StreamConfig,
        regime_config: RegimeConfig,
        seed: u64,
    ) -> Self {
        let stream = LiveStreamSimulator::with_seed(base_price, stream_config, seed);
        // Offset keeps the regime draws decoupled from the price draws.
        let controller = RegimeController::with_seed(regime_config, seed.wrapping_add(1));
        Self::build(stream, controller)
    }

    fn build(mut stream: LiveStreamSimulator, controller: RegimeController) -> Self {
        let window = stream.initialize(controller.current());
        Self {
            stream,
            controller,
            window,
        }
    }

    /// Stream-tick callback: append the next sample under the current
    /// regime, evicting the oldest at capacity.
    pub fn advance(&mut self) -> PricePoint {
        let regime = self.controller.current();
        self.stream.advance(&mut self.window, regime)
    }

    /// Regime-timer callback: draw and install a fresh regime.
    pub fn switch_regime(&mut self) -> MarketRegime {
        self.controller.switch()
    }

    /// The rolling window, oldest sample first.
    pub fn window(&self) -> &PriceWindow {
        &self.window
    }

    /// Snapshot of the active regime.
    pub fn regime(&self) -> MarketRegime {
        self.controller.current()
    }

    /// The live window as a renderable series.
    pub fn series(&self) -> ChartSeries {
        ChartSeries::from_window(&self.window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(seed: u64) -> ChartSession {
        ChartSession::with_seed(30000.0, StreamConfig::default(), RegimeConfig::default(), seed)
    }

    #[test]
    fn test_session_seeds_full_window() {
        let session = session(1);
        assert_eq!(session.window().len(), 1000);
        assert_eq!(session.regime(), MarketRegime::default());
    }

    #[test]
    fn test_advance_is_capacity_preserving() {
        let mut session = session(2);

        for expected in 1000..1050 {
            let point = session.advance();
            assert_eq!(point.index, expected);
            assert_eq!(session.window().len(), 1000);
        }
    }

    #[test]
    fn test_switch_regime_feeds_later_ticks() {
        let mut session = session(3);

        let switched = session.switch_regime();
        assert_eq!(session.regime(), switched);

        // Ticks after the switch still respect the window invariants.
        let point = session.advance();
        assert_eq!(point.index, 1000);
        assert!(point.value >= 15000.0 && point.value <= 60000.0);
    }

    #[test]
    fn test_series_matches_window() {
        let session = session(4);
        let series = session.series();
        assert_eq!(series.dataset_count(), 1);
        assert_eq!(series.datasets[0], session.window().values());
    }
}
