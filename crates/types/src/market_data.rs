//! Price sample types shared by the live stream and the Monte Carlo
//! simulator.

use serde::{Deserialize, Serialize};

/// A single sampled price in a series.
///
/// `index` is the sample's position within its owning series: the tick
/// number for the live stream, the step number for a Monte Carlo path.
/// Indices are unique and strictly increasing within one series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Position in the owning series.
    pub index: u64,
    /// Sampled price in USD.
    pub value: f64,
}

impl PricePoint {
    /// Create a new price point.
    #[inline]
    pub fn new(index: u64, value: f64) -> Self {
        Self { index, value }
    }
}
