//! Core types for the crypto chart simulator.
//!
//! This crate provides the plain-data types shared across the simulation:
//! price samples, market regimes, simulator configuration, and the asset
//! records delivered by the (external) price API.
//!
//! Everything here is pure data: no randomness, no clocks, no I/O. The
//! behavior lives in `sim-core`; the types are serde-serializable so the
//! hosting UI layer can pass them across its own boundaries unchanged.

pub mod asset;
pub mod config;
pub mod market_data;
pub mod regime;

pub use asset::{AssetList, AssetRecord, parse_num, parse_num_or};
pub use config::{RegimeConfig, SimulationConfig, StreamConfig};
pub use market_data::PricePoint;
pub use regime::MarketRegime;

/// Asset ticker symbol (e.g., "BTC", "ETH").
pub type Symbol = String;
