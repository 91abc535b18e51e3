//! finsight-rates: currency exchange-rate lookup (Frankfurter API).
//!
//! The rate is informational only; nothing in the analysis pipeline applies
//! it to transaction amounts.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;

const API_BASE: &str = "https://api.frankfurter.app";

#[derive(Debug, Deserialize)]
struct RateResponse {
    rates: HashMap<String, f64>,
}

/// Fetch the exchange rate from `from_currency` to `to_currency`.
///
/// Returns `Ok(None)` when the API answers with a non-success status
/// (unknown currency codes, for example); transport failures propagate as
/// errors.
pub async fn get_rate(from_currency: &str, to_currency: &str) -> Result<Option<f64>> {
    let url = format!("{API_BASE}/latest?from={from_currency}&to={to_currency}");

    let resp = reqwest::get(&url)
        .await
        .with_context(|| format!("requesting {url}"))?;

    if !resp.status().is_success() {
        return Ok(None);
    }

    let body: RateResponse = resp
        .json()
        .await
        .context("decoding exchange-rate response")?;
    Ok(body.rates.get(to_currency).copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_response_decoding() {
        let body = r#"{"amount":1.0,"base":"EUR","date":"2024-01-05","rates":{"USD":1.0921}}"#;
        let parsed: RateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.rates.get("USD"), Some(&1.0921));
    }

    #[test]
    fn test_rate_missing_target_currency() {
        let body = r#"{"amount":1.0,"base":"EUR","date":"2024-01-05","rates":{"GBP":0.86}}"#;
        let parsed: RateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.rates.get("USD"), None);
    }
}
