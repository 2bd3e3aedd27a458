use crate::core::currency::{Corridor, Currency};
use crate::core::fees::FeeSchedule;
use crate::rates::table::RateTable;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest USD amount accepted for a transfer.
pub const MIN_SEND_USD: Decimal = dec!(10);
/// Largest USD amount accepted for a transfer.
pub const MAX_SEND_USD: Decimal = dec!(2000);

/// Validation failures for a requested send amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("minimum transfer amount is $10")]
    BelowMinimum,
    #[error("maximum transfer amount is $2000")]
    AboveMaximum,
}

/// A fully priced transfer quote.
///
/// Derived entirely from the send amount, the corridor, and a rate table.
/// A quote has no identity or lifecycle of its own; it is recomputed on
/// every input change and never stored.
///
/// Both rounded figures are whole numbers: the fee in USD and the payout
/// in destination units. Rounding is always toward positive infinity, so
/// the fee never undercuts the schedule and the payout is never truncated
/// below the converted value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// USD amount the sender entered.
    pub original_amount: Decimal,
    /// Fee percentage applied on this corridor.
    pub fee_percentage: Decimal,
    /// Fee in whole USD, rounded up from the nominal percentage.
    pub fee: Decimal,
    /// USD remaining after the fee. May be fractional.
    pub amount_after_fee: Decimal,
    /// Exchange rate used, destination units per 1 USD.
    pub exchange_rate: Decimal,
    /// Whole destination units delivered to the recipient.
    pub final_amount: Decimal,
    /// Destination currency.
    pub currency: Currency,
    /// Destination country label.
    pub country: String,
}

/// The quoting engine.
///
/// Pure functions over a send amount, a corridor, and a rate table.
/// No shared state and no side effects; safe to call from anywhere.
pub struct QuoteEngine;

impl QuoteEngine {
    /// Check a USD send amount against the product bounds.
    ///
    /// The bounds are inclusive: exactly $10 and exactly $2000 both pass.
    ///
    /// # Examples
    ///
    /// ```
    /// use remit_engine::core::quote::{AmountError, QuoteEngine};
    /// use rust_decimal_macros::dec;
    ///
    /// assert!(QuoteEngine::validate_amount(dec!(10)).is_ok());
    /// assert!(QuoteEngine::validate_amount(dec!(2000)).is_ok());
    /// assert_eq!(
    ///     QuoteEngine::validate_amount(dec!(9.99)),
    ///     Err(AmountError::BelowMinimum),
    /// );
    /// ```
    pub fn validate_amount(amount_usd: Decimal) -> Result<(), AmountError> {
        if amount_usd < MIN_SEND_USD {
            return Err(AmountError::BelowMinimum);
        }
        if amount_usd > MAX_SEND_USD {
            return Err(AmountError::AboveMaximum);
        }
        Ok(())
    }

    /// Price a transfer on the given corridor.
    ///
    /// The fee is `ceil(amount × percentage / 100)` in whole USD and the
    /// payout is `ceil((amount − fee) × rate)` in whole destination units.
    /// The intermediate after-fee amount is not separately rounded.
    ///
    /// The caller must have accepted `amount_usd` through
    /// [`QuoteEngine::validate_amount`] first; a malformed amount here is
    /// a programming error, not a recoverable condition.
    ///
    /// # Panics
    ///
    /// Panics if `amount_usd` is not positive.
    ///
    /// # Examples
    ///
    /// ```
    /// use remit_engine::core::currency::Corridor;
    /// use remit_engine::core::quote::QuoteEngine;
    /// use remit_engine::rates::table::RateTable;
    /// use rust_decimal_macros::dec;
    ///
    /// let rates = RateTable::fallback();
    /// let quote = QuoteEngine::quote(dec!(100), Corridor::Gbp, &rates);
    ///
    /// assert_eq!(quote.fee, dec!(10));
    /// assert_eq!(quote.amount_after_fee, dec!(90));
    /// assert_eq!(quote.final_amount, dec!(77)); // ceil(90 × 0.85)
    /// assert_eq!(quote.country, "United Kingdom");
    /// ```
    pub fn quote(amount_usd: Decimal, corridor: Corridor, rates: &RateTable) -> Quote {
        assert!(
            amount_usd > Decimal::ZERO,
            "send amount must be positive, got {}",
            amount_usd
        );

        let fee_percentage = FeeSchedule::standard().percent_for(corridor);
        let exchange_rate = rates.rate_for(corridor);

        let fee = (amount_usd * fee_percentage / Decimal::from(100)).ceil();
        let amount_after_fee = amount_usd - fee;
        let final_amount = (amount_after_fee * exchange_rate).ceil();

        Quote {
            original_amount: amount_usd,
            fee_percentage,
            fee,
            amount_after_fee,
            exchange_rate,
            final_amount,
            currency: corridor.currency(),
            country: corridor.country().to_string(),
        }
    }
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Transfer Quote ===")?;
        writeln!(f, "Send:          ${}", self.original_amount)?;
        writeln!(f, "Fee ({}%):     ${}", self.fee_percentage, self.fee)?;
        writeln!(f, "After fee:     ${}", self.amount_after_fee)?;
        writeln!(f, "Rate:          {} / USD", self.exchange_rate)?;
        writeln!(
            f,
            "Recipient gets: {}{} ({})",
            self.currency.symbol(),
            self.final_amount,
            self.country
        )?;
        Ok(())
    }
}
