//! # remit-engine
//!
//! Remittance quoting engine for a two-corridor send-money product:
//! USD in, GBP or ZAR out, with a fixed per-corridor fee schedule,
//! up-only rounding, and fixed-rate failover when the live rate feed
//! is unavailable.
//!
//! ## Architecture
//!
//! - **core** — Foundational types: currencies and corridors, the fee
//!   schedule, the quoting engine, transfer records
//! - **rates** — Rate tables, the live rate source, and failover policy
//! - **account** — Sign-up/login role-play over an injected blob store
//! - **history** — Pagination and demo transfer history
//! - **display** — Front-of-house amount and date formatting

pub mod account;
pub mod core;
pub mod display;
pub mod history;
pub mod rates;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::account::service::AccountService;
    pub use crate::account::store::{BlobStore, FileStore, MemoryStore};
    pub use crate::core::currency::{Corridor, Currency};
    pub use crate::core::fees::FeeSchedule;
    pub use crate::core::quote::{AmountError, Quote, QuoteEngine};
    pub use crate::core::transaction::{Transaction, TransactionStatus};
    pub use crate::history::pagination::{paginate, HistoryPage};
    pub use crate::rates::source::{resolve, RateOrigin, RateSource, ResolvedRates};
    pub use crate::rates::table::RateTable;
}
