//! Price sanitization.

use tracing::warn;

/// Clamp `price` into `[floor, ceiling]`, substituting `fallback` for
/// non-finite input.
///
/// A NaN or infinite price is recovered locally: the fallback is returned
/// and a warning is logged, but no error is raised. One bad sample must
/// never take down the stream that produced it.
///
/// Pure and deterministic given identical inputs. Callers guarantee
/// `floor <= ceiling`.
pub fn validate_price(price: f64, floor: f64, ceiling: f64, fallback: f64) -> f64 {
    if !price.is_finite() {
        warn!(price, "non-finite price replaced with fallback");
        return fallback;
    }
    price.max(floor).min(ceiling)
}
