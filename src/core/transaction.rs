use crate::core::currency::Currency;
use crate::core::quote::Quote;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Lifecycle state of a recorded transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionStatus::Completed => "completed",
            TransactionStatus::Pending => "pending",
            TransactionStatus::Failed => "failed",
        };
        write!(f, "{}", label)
    }
}

/// A recorded transfer in the user's history.
///
/// The amount is denominated in the destination currency: it is the
/// payout figure of the quote the transfer was priced from. Transactions
/// are immutable once created.
///
/// # Examples
///
/// ```
/// use remit_engine::core::currency::Corridor;
/// use remit_engine::core::quote::QuoteEngine;
/// use remit_engine::core::transaction::Transaction;
/// use remit_engine::rates::table::RateTable;
/// use rust_decimal_macros::dec;
///
/// let quote = QuoteEngine::quote(dec!(100), Corridor::Gbp, &RateTable::fallback());
/// let txn = Transaction::from_quote(&quote, "Sarah Mukamuri");
///
/// assert_eq!(txn.amount(), dec!(77));
/// assert_eq!(txn.country(), "United Kingdom");
/// assert!(txn.reference().starts_with("WM"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier for this transfer.
    id: Uuid,
    /// Customer-facing reference, e.g. "WM20240115A3F0".
    reference: String,
    /// Recipient display name.
    recipient: String,
    /// Payout amount in the destination currency. Must be positive.
    amount: Decimal,
    /// Destination currency.
    currency: Currency,
    /// Destination country label.
    country: String,
    /// When the transfer was recorded.
    date: DateTime<Utc>,
    /// Current lifecycle state.
    status: TransactionStatus,
}

impl Transaction {
    /// Record a completed transfer priced by `quote`.
    pub fn from_quote(quote: &Quote, recipient: impl Into<String>) -> Self {
        Self::new(
            quote.final_amount,
            quote.currency,
            quote.country.clone(),
            recipient,
            Utc::now(),
        )
    }

    /// Create a transfer record directly.
    ///
    /// # Panics
    ///
    /// Panics if `amount` is not positive.
    pub fn new(
        amount: Decimal,
        currency: Currency,
        country: impl Into<String>,
        recipient: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        assert!(
            amount > Decimal::ZERO,
            "transaction amount must be positive, got {}",
            amount
        );
        let id = Uuid::new_v4();
        Self {
            reference: make_reference(id, date),
            id,
            recipient: recipient.into(),
            amount,
            currency,
            country: country.into(),
            date,
            status: TransactionStatus::Completed,
        }
    }

    /// Create a transfer with a specific ID (useful for testing / determinism).
    pub fn with_id(
        id: Uuid,
        amount: Decimal,
        currency: Currency,
        country: impl Into<String>,
        recipient: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        assert!(amount > Decimal::ZERO);
        Self {
            reference: make_reference(id, date),
            id,
            recipient: recipient.into(),
            amount,
            currency,
            country: country.into(),
            date,
            status: TransactionStatus::Completed,
        }
    }

    /// Set the lifecycle state.
    pub fn with_status(mut self, status: TransactionStatus) -> Self {
        self.status = status;
        self
    }

    /// Override the customer-facing reference.
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = reference.into();
        self
    }

    // --- Accessors ---

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn status(&self) -> TransactionStatus {
        self.status
    }
}

/// Build a reference like "WM20240115A3F0": prefix, date, ID fragment.
fn make_reference(id: Uuid, date: DateTime<Utc>) -> String {
    let fragment: String = id
        .simple()
        .to_string()
        .chars()
        .take(4)
        .collect::<String>()
        .to_uppercase();
    format!("WM{}{}", date.format("%Y%m%d"), fragment)
}
