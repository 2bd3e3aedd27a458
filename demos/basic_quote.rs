//! Price two transfers against the fixed fallback rates.
//!
//! ```bash
//! cargo run --example basic_quote
//! ```

use remit_engine::core::currency::Corridor;
use remit_engine::core::quote::QuoteEngine;
use remit_engine::rates::table::RateTable;
use rust_decimal_macros::dec;

fn main() {
    let rates = RateTable::fallback();

    for corridor in Corridor::ALL {
        let amount = dec!(100);
        QuoteEngine::validate_amount(amount).expect("amount is within bounds");
        let quote = QuoteEngine::quote(amount, corridor, &rates);
        println!("{}", quote);
    }
}
