//! End-to-end demo: register an account, price a transfer, record it,
//! and page through the resulting history.
//!
//! ```bash
//! cargo run --example send_money_flow
//! ```

use remit_engine::account::service::AccountService;
use remit_engine::account::store::MemoryStore;
use remit_engine::core::currency::Corridor;
use remit_engine::core::quote::QuoteEngine;
use remit_engine::core::transaction::Transaction;
use remit_engine::display::{format_amount, format_date};
use remit_engine::history::pagination::{newest_first, paginate};
use remit_engine::history::seed::seed_history;
use remit_engine::rates::source::{resolve, StaticRateSource};
use remit_engine::rates::table::RateTable;
use rust_decimal_macros::dec;

fn main() {
    // Register and log in against an in-memory store.
    let mut accounts = AccountService::new(MemoryStore::new());
    let user = accounts
        .sign_up("Tendai Moyo", "tendai@example.com", "Secur3Pass")
        .expect("registration succeeds");
    accounts.set_current_user(&user).expect("session persists");
    println!("Logged in as {} <{}>\n", user.name, user.email);

    // Resolve rates (a fixed source here; the CLI uses the live endpoint).
    let resolved = resolve(&StaticRateSource(RateTable::fallback()));

    // Price and record a $250 transfer to South Africa.
    let amount = dec!(250);
    QuoteEngine::validate_amount(amount).expect("amount is within bounds");
    let quote = QuoteEngine::quote(amount, Corridor::Zar, &resolved.table);
    println!("{}", quote);

    let txn = Transaction::from_quote(&quote, "David Chikwanha");
    let mut history = seed_history();
    history.push(txn);
    let history = newest_first(history);

    // Show the first page, newest first.
    let page = paginate(&history, 1, 5);
    println!(
        "Transfer history (page {} of {}):",
        page.page, page.total_pages
    );
    for txn in &page.transactions {
        println!(
            "  {}  {:<20} {:>12}  [{}]",
            format_date(txn.date()),
            txn.recipient(),
            format_amount(txn.amount(), txn.currency()),
            txn.status()
        );
    }
}
