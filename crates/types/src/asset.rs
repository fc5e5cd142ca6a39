//! Asset records delivered by the (external) price API.
//!
//! The API string-encodes every numeric field and omits fields freely, so
//! the record keeps the wire shape (`Option<String>` everywhere) and exposes
//! parsed accessors plus the derived display metrics the asset list shows.

use serde::{Deserialize, Serialize};

/// Parse a string-encoded number, treating empty or unparseable input as 0.
///
/// This is the boundary contract for everything the price API delivers:
/// a missing or malformed number degrades to 0, never to an error.
pub fn parse_num(s: &str) -> f64 {
    parse_num_or(s, 0.0)
}

/// Parse a string-encoded number with a fallback.
///
/// A parse result of exactly 0 also yields the fallback, matching the
/// upstream display code this contract was lifted from.
pub fn parse_num_or(s: &str, fallback: f64) -> f64 {
    match s.trim().parse::<f64>() {
        Ok(v) if v != 0.0 && v.is_finite() => v,
        _ => fallback,
    }
}

// =============================================================================
// AssetRecord
// =============================================================================

/// One asset as delivered by the price API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    /// API identifier (e.g., "bitcoin").
    pub id: Option<String>,
    /// Market-cap rank, string-encoded.
    pub rank: Option<String>,
    /// Ticker symbol (e.g., "BTC").
    pub symbol: Option<String>,
    /// Display name (e.g., "Bitcoin").
    pub name: Option<String>,
    /// Circulating supply, string-encoded.
    pub supply: Option<String>,
    /// Maximum supply, string-encoded; may be absent.
    pub max_supply: Option<String>,
    /// Market capitalization in USD, string-encoded.
    pub market_cap_usd: Option<String>,
    /// 24-hour trading volume in USD, string-encoded.
    #[serde(rename = "volumeUsd24Hr")]
    pub volume_usd_24hr: Option<String>,
    /// Current price in USD, string-encoded.
    pub price_usd: Option<String>,
    /// 24-hour price change in percent, string-encoded.
    #[serde(rename = "changePercent24Hr")]
    pub change_percent_24hr: Option<String>,
    /// 24-hour volume-weighted average price, string-encoded.
    #[serde(rename = "vwap24Hr")]
    pub vwap_24hr: Option<String>,
    /// Block-explorer URL.
    pub explorer: Option<String>,
}

impl AssetRecord {
    fn num(field: &Option<String>) -> f64 {
        parse_num(field.as_deref().unwrap_or(""))
    }

    /// Current price in USD (0 when missing or malformed).
    pub fn price(&self) -> f64 {
        Self::num(&self.price_usd)
    }

    /// 24-hour change in percent (0 when missing or malformed).
    pub fn change_percent(&self) -> f64 {
        Self::num(&self.change_percent_24hr)
    }

    /// Circulating supply as a percentage of the maximum supply.
    pub fn supply_percent(&self) -> f64 {
        let supply = Self::num(&self.supply);
        let max_supply = parse_num_or(self.max_supply.as_deref().unwrap_or(""), 1.0);
        supply / max_supply * 100.0
    }

    /// Price 24 hours ago, backed out of the current price and the change.
    pub fn previous_price(&self) -> f64 {
        self.price() / (1.0 + self.change_percent() / 100.0)
    }

    /// Return over the last 24 hours, in percent of the previous price.
    pub fn roi_24h(&self) -> f64 {
        let prev = self.previous_price();
        (self.price() - prev) / prev * 100.0
    }

    /// Annualized volatility in percent, scaled from the daily change.
    pub fn annualized_volatility(&self) -> f64 {
        let daily_change = self.change_percent().abs() / 100.0;
        daily_change * 365.0_f64.sqrt() * 100.0
    }

    /// Annualized return in percent, compounded from the daily change.
    ///
    /// The daily change is clamped to ±99% before compounding and the
    /// result is capped to `[-100, 10000]` so a single outlier day does not
    /// produce an absurd figure.
    pub fn annual_roi(&self) -> f64 {
        let raw_change = self.change_percent().max(-99.0).min(99.0);
        let daily_rate = raw_change / 100.0;
        let roi = ((1.0 + daily_rate).powi(365) - 1.0) * 100.0;
        roi.max(-100.0).min(10000.0)
    }
}

// =============================================================================
// AssetList
// =============================================================================

/// The full asset payload: a list of records plus the server timestamp.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetList {
    /// Assets in API rank order.
    #[serde(default)]
    pub data: Vec<AssetRecord>,
    /// Server timestamp in milliseconds, when provided.
    #[serde(default)]
    pub timestamp: Option<u64>,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_num_degrades_to_zero() {
        assert_eq!(parse_num("30000"), 30000.0);
        assert_eq!(parse_num("  1.5 "), 1.5);
        assert_eq!(parse_num(""), 0.0);
        assert_eq!(parse_num("not-a-number"), 0.0);
        assert_eq!(parse_num("NaN"), 0.0);
    }

    #[test]
    fn test_parse_num_or_treats_zero_as_missing() {
        assert_eq!(parse_num_or("", 30000.0), 30000.0);
        assert_eq!(parse_num_or("0", 30000.0), 30000.0);
        assert_eq!(parse_num_or("2500", 30000.0), 2500.0);
    }

    fn bitcoin() -> AssetRecord {
        serde_json::from_str(
            r#"{
                "id": "bitcoin",
                "rank": "1",
                "symbol": "BTC",
                "name": "Bitcoin",
                "supply": "19000000",
                "maxSupply": "21000000",
                "marketCapUsd": "570000000000.0",
                "volumeUsd24Hr": "12000000000.0",
                "priceUsd": "30000",
                "changePercent24Hr": "2.0",
                "vwap24Hr": "29900.0",
                "explorer": "https://blockchain.info/"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_wire_field_names() {
        let asset = bitcoin();
        assert_eq!(asset.symbol.as_deref(), Some("BTC"));
        assert_eq!(asset.max_supply.as_deref(), Some("21000000"));
        assert_eq!(asset.volume_usd_24hr.as_deref(), Some("12000000000.0"));
        assert_eq!(asset.vwap_24hr.as_deref(), Some("29900.0"));
        assert_eq!(asset.price(), 30000.0);
        assert_eq!(asset.change_percent(), 2.0);
    }

    #[test]
    fn test_derived_metrics() {
        let asset = bitcoin();

        let supply_pct = asset.supply_percent();
        assert!((supply_pct - 19.0 / 21.0 * 100.0).abs() < 1e-9);

        // +2% over 24h: previous price backs out to 30000 / 1.02.
        let prev = asset.previous_price();
        assert!((prev - 30000.0 / 1.02).abs() < 1e-9);
        assert!((asset.roi_24h() - 2.0).abs() < 1e-9);

        let vol = asset.annualized_volatility();
        assert!((vol - 0.02 * 365.0_f64.sqrt() * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_annual_roi_is_capped() {
        let mut asset = bitcoin();

        // 2% a day compounds over the cap; the cap applies.
        assert_eq!(asset.annual_roi(), 10000.0);

        asset.change_percent_24hr = Some("-150".to_string());
        // Clamped to -99% daily, then floored at -100% annually.
        assert_eq!(asset.annual_roi(), -100.0);
    }

    #[test]
    fn test_missing_fields_degrade_gracefully() {
        let asset: AssetRecord = serde_json::from_str(r#"{"id": "mystery"}"#).unwrap();
        assert_eq!(asset.price(), 0.0);
        assert_eq!(asset.change_percent(), 0.0);
        // Missing max supply falls back to 1, not a division by zero.
        assert_eq!(asset.supply_percent(), 0.0);
    }

    #[test]
    fn test_asset_list_payload() {
        let list: AssetList = serde_json::from_str(
            r#"{"data": [{"id": "bitcoin"}, {"id": "ethereum"}], "timestamp": 1700000000000}"#,
        )
        .unwrap();
        assert_eq!(list.data.len(), 2);
        assert_eq!(list.timestamp, Some(1700000000000));

        let empty: AssetList = serde_json::from_str("{}").unwrap();
        assert!(empty.data.is_empty());
        assert_eq!(empty.timestamp, None);
    }
}
