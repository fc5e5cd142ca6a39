//! Price-path generation engine for the crypto chart simulator.
//!
//! Two generators share the same sample type:
//!
//! - [`LiveStreamSimulator`] maintains a fixed-capacity rolling window of
//!   prices, advanced one tick at a time under the current [`MarketRegime`]
//!   held by a [`RegimeController`].
//! - [`MonteCarloSimulator`] produces a batch of independent forward price
//!   paths from a starting price.
//!
//! Both are driven entirely by their callers. The reference cadences
//! (500 ms stream ticks, 10 s regime switches) belong to the hosting UI
//! runtime, which invokes [`ChartSession::advance`] and
//! [`ChartSession::switch_regime`] from its own timers; every engine call is
//! synchronous and bounded, so stopping the timers stops the session.
//!
//! Generated values are sanitized by [`validate_price`]: the live stream is
//! clamped into `[base * 0.5, base * 2]` while Monte Carlo paths are only
//! floored at zero, since forward paths may legitimately leave the
//! historical band.
//!
//! [`MarketRegime`]: types::MarketRegime

pub mod chart;
pub mod error;
pub mod montecarlo;
pub mod regime;
pub mod session;
pub mod stream;
pub mod validator;
pub mod window;

pub use chart::ChartSeries;
pub use error::{Result, SimCoreError};
pub use montecarlo::{MonteCarloSimulator, SimulationResult};
pub use regime::RegimeController;
pub use session::ChartSession;
pub use stream::LiveStreamSimulator;
pub use validator::validate_price;
pub use window::PriceWindow;
