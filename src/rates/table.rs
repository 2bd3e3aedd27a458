use crate::core::currency::Corridor;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors arising from exchange-rate retrieval and construction.
#[derive(Debug, Error)]
pub enum RateError {
    #[error("exchange rate must be positive, got {rate} for {corridor}")]
    InvalidRate { corridor: Corridor, rate: Decimal },
    #[error("rate endpoint request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("rate endpoint returned a malformed document: {0}")]
    Malformed(String),
}

/// Exchange rates for the supported corridors, destination units per 1 USD.
///
/// A `RateTable` always carries a positive rate for every corridor (the
/// constructor rejects anything else), so lookups are infallible. Tables
/// built from the live endpoint and tables built from the fallback
/// constants are indistinguishable to the quoting engine.
///
/// # Examples
///
/// ```
/// use remit_engine::core::currency::Corridor;
/// use remit_engine::rates::table::RateTable;
/// use rust_decimal_macros::dec;
///
/// let table = RateTable::new(dec!(0.85), dec!(18.5)).unwrap();
/// assert_eq!(table.rate_for(Corridor::Gbp), dec!(0.85));
/// assert_eq!(table.rate_for(Corridor::Zar), dec!(18.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    gbp: Decimal,
    zar: Decimal,
}

/// Fallback rate used when the live GBP rate is unavailable.
pub const FALLBACK_GBP: Decimal = dec!(0.85);
/// Fallback rate used when the live ZAR rate is unavailable.
pub const FALLBACK_ZAR: Decimal = dec!(18.5);

impl RateTable {
    /// Build a table from per-corridor rates.
    ///
    /// Fails with [`RateError::InvalidRate`] if either rate is zero or
    /// negative.
    pub fn new(gbp: Decimal, zar: Decimal) -> Result<Self, RateError> {
        if gbp <= Decimal::ZERO {
            return Err(RateError::InvalidRate {
                corridor: Corridor::Gbp,
                rate: gbp,
            });
        }
        if zar <= Decimal::ZERO {
            return Err(RateError::InvalidRate {
                corridor: Corridor::Zar,
                rate: zar,
            });
        }
        Ok(Self { gbp, zar })
    }

    /// The fixed fallback table: GBP = 0.85, ZAR = 18.5.
    pub fn fallback() -> Self {
        Self {
            gbp: FALLBACK_GBP,
            zar: FALLBACK_ZAR,
        }
    }

    /// Exchange rate for the given corridor.
    pub fn rate_for(&self, corridor: Corridor) -> Decimal {
        match corridor {
            Corridor::Gbp => self.gbp,
            Corridor::Zar => self.zar,
        }
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::fallback()
    }
}
