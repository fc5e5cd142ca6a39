//! Central configuration for the chart simulator binary.
//!
//! All run parameters are collected here for easy tuning; CLI arguments
//! override individual fields.

use types::{RegimeConfig, SimulationConfig, StreamConfig};

/// Master configuration for one demo run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    // ─────────────────────────────────────────────────────────────────────────
    // Asset
    // ─────────────────────────────────────────────────────────────────────────
    /// Ticker symbol shown in output.
    pub symbol: String,
    /// Base price in USD, already parsed from the API's string encoding.
    pub base_price: f64,

    // ─────────────────────────────────────────────────────────────────────────
    // Live Stream
    // ─────────────────────────────────────────────────────────────────────────
    /// Stream ticks to run.
    pub total_ticks: u64,
    /// Delay between stream ticks in milliseconds (reference cadence: 500;
    /// 0 = fastest).
    pub tick_delay_ms: u64,
    /// Stream ticks between regime switches (reference: 20, i.e. 10 s at
    /// 500 ms per tick; 0 = never switch).
    pub regime_interval: u64,
    /// Stream tuning (window capacity, noise, band, wave shape).
    pub stream: StreamConfig,
    /// Regime-switch tuning (bull probability, volatility draw).
    pub regime: RegimeConfig,

    // ─────────────────────────────────────────────────────────────────────────
    // Monte Carlo
    // ─────────────────────────────────────────────────────────────────────────
    /// Forward-path simulation parameters.
    pub simulation: SimulationConfig,

    // ─────────────────────────────────────────────────────────────────────────
    // Run Control
    // ─────────────────────────────────────────────────────────────────────────
    /// Seed for reproducible runs (None = OS entropy).
    pub seed: Option<u64>,
    /// Emit chart series as JSON on stdout instead of the text summary.
    pub json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            symbol: "BTC".to_string(),
            base_price: 30000.0,
            total_ticks: 200,
            tick_delay_ms: 0,
            regime_interval: 20,
            stream: StreamConfig::default(),
            regime: RegimeConfig::default(),
            simulation: SimulationConfig::default(),
            seed: None,
            json: false,
        }
    }
}
