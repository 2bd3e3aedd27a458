//! Live exchange-rate retrieval with fixed-rate failover.
//!
//! Rates come from a single JSON endpoint, fetched once per run. Any
//! failure (network, malformed document, missing or non-positive values)
//! degrades to the fixed fallback constants, and the result is tagged
//! with its origin so callers can flag a non-live quote.

use crate::rates::table::{RateError, RateTable, FALLBACK_GBP, FALLBACK_ZAR};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default rate endpoint polled by the product.
pub const DEFAULT_ENDPOINT: &str =
    "https://68976304250b078c2041c7fc.mockapi.io/api/wiremit/InterviewAPIS";

/// Where a resolved rate table came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateOrigin {
    /// Fetched from the live endpoint.
    Live,
    /// Substituted fixed constants after a fetch failure.
    Fallback,
}

/// A rate table together with its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRates {
    pub table: RateTable,
    pub origin: RateOrigin,
}

impl ResolvedRates {
    pub fn is_live(&self) -> bool {
        self.origin == RateOrigin::Live
    }
}

/// Source of exchange rates for the supported corridors.
pub trait RateSource {
    fn fetch(&self) -> Result<RateTable, RateError>;
}

/// Resolve rates from a source, degrading to the fixed fallback table.
///
/// This is the shared failover policy: the engine downstream consumes the
/// table from either origin indistinguishably, and only the display layer
/// cares about [`RateOrigin`].
pub fn resolve(source: &dyn RateSource) -> ResolvedRates {
    match source.fetch() {
        Ok(table) => ResolvedRates {
            table,
            origin: RateOrigin::Live,
        },
        Err(err) => {
            log::warn!("live rates unavailable, using fixed fallback rates: {err}");
            ResolvedRates {
                table: RateTable::fallback(),
                origin: RateOrigin::Fallback,
            }
        }
    }
}

/// Fixed source for tests, demos, and offline runs.
#[derive(Debug, Clone, Copy)]
pub struct StaticRateSource(pub RateTable);

impl RateSource for StaticRateSource {
    fn fetch(&self) -> Result<RateTable, RateError> {
        Ok(self.0)
    }
}

/// One-shot HTTPS rate fetcher.
///
/// The endpoint's document shape is loose: each rate may sit under a
/// top-level `"rates"` object or directly at the top level, as a number
/// or a numeric string. A missing or non-positive value for one currency
/// falls back to that currency's fixed constant without failing the
/// other.
pub struct HttpRateSource {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpRateSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::blocking::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpRateSource {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl RateSource for HttpRateSource {
    fn fetch(&self) -> Result<RateTable, RateError> {
        let doc: Value = self
            .client
            .get(&self.endpoint)
            .send()?
            .error_for_status()?
            .json()?;
        table_from_document(&doc)
    }
}

/// Extract a rate table from an endpoint document.
pub fn table_from_document(doc: &Value) -> Result<RateTable, RateError> {
    if !doc.is_object() {
        return Err(RateError::Malformed(format!(
            "expected a JSON object, got {doc}"
        )));
    }
    let gbp = pick_rate(doc, "GBP", FALLBACK_GBP);
    let zar = pick_rate(doc, "ZAR", FALLBACK_ZAR);
    RateTable::new(gbp, zar)
}

/// First positive value among `doc.rates.<code>` and `doc.<code>`,
/// otherwise the fixed fallback for that currency.
fn pick_rate(doc: &Value, code: &str, fallback: Decimal) -> Decimal {
    let nested = doc.get("rates").and_then(|rates| rates.get(code));
    let flat = doc.get(code);
    for value in [nested, flat].into_iter().flatten() {
        if let Some(rate) = decimal_from_value(value) {
            if rate > Decimal::ZERO {
                return rate;
            }
        }
    }
    fallback
}

fn decimal_from_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => Decimal::from_f64_retain(n.as_f64()?),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}
