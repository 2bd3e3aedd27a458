//! remit-engine CLI
//!
//! Price transfers and browse demo history from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Quote a transfer (fetches live rates, falls back to fixed rates)
//! remit-engine quote --amount 100 --to GBP
//!
//! # Quote offline with the fixed fallback rates
//! remit-engine quote --amount 100 --to ZAR --offline
//!
//! # Show the resolved rate table
//! remit-engine rates --format json
//!
//! # Page through the demo history
//! remit-engine history --page 2 --page-size 5
//!
//! # Generate a random history for testing
//! remit-engine generate --count 30 --output history.json
//! ```

use remit_engine::core::currency::Corridor;
use remit_engine::core::quote::QuoteEngine;
use remit_engine::core::transaction::Transaction;
use remit_engine::display::{format_amount, format_date};
use remit_engine::history::pagination::{newest_first, paginate};
use remit_engine::history::seed::{generate_history, seed_history, HistoryConfig};
use remit_engine::rates::source::{resolve, HttpRateSource, RateOrigin, ResolvedRates};
use remit_engine::rates::table::RateTable;
use rust_decimal::Decimal;
use std::fs;
use std::process;

fn print_usage() {
    eprintln!(
        r#"remit-engine — remittance quoting with corridor fees and rate failover

USAGE:
    remit-engine <COMMAND> [OPTIONS]

COMMANDS:
    quote       Price a USD transfer to a destination currency
    rates       Show the resolved exchange-rate table
    history     Page through the demo transfer history
    generate    Generate a random transfer history (for testing)
    help        Show this message

OPTIONS (quote):
    --amount <USD>      Send amount in USD (10 to 2000, inclusive)
    --to <CURRENCY>     Destination currency: GBP or ZAR
    --offline           Skip the live fetch, use the fixed fallback rates
    --format <FORMAT>   Output format: text (default) or json

OPTIONS (rates):
    --offline           Skip the live fetch, use the fixed fallback rates
    --format <FORMAT>   Output format: text (default) or json

OPTIONS (history):
    --page <N>          Page number, 1-based (default: 1)
    --page-size <N>     Records per page (default: 5)
    --count <N>         Generate N random records instead of the seed data
    --format <FORMAT>   Output format: text (default) or json

OPTIONS (generate):
    --count <N>         Number of records (default: 15)
    --output <FILE>     Write to file instead of stdout

EXAMPLES:
    remit-engine quote --amount 100 --to GBP
    remit-engine quote --amount 250 --to ZAR --offline --format json
    remit-engine history --page 2 --page-size 5
    remit-engine generate --count 30 --output history.json"#
    );
}

/// JSON output schema for quotes.
#[derive(serde::Serialize)]
struct QuoteOutput {
    original_amount: String,
    fee_percentage: String,
    fee: String,
    amount_after_fee: String,
    exchange_rate: String,
    final_amount: String,
    currency: String,
    country: String,
    live_rates: bool,
}

/// JSON output schema for the rate table.
#[derive(serde::Serialize)]
struct RatesOutput {
    gbp: String,
    zar: String,
    origin: String,
}

fn resolve_rates(offline: bool) -> ResolvedRates {
    if offline {
        return ResolvedRates {
            table: RateTable::fallback(),
            origin: RateOrigin::Fallback,
        };
    }
    let source = HttpRateSource::default();
    log::debug!("fetching rates from {}", source.endpoint());
    resolve(&source)
}

fn cmd_quote(args: &[String]) {
    let mut amount_arg = None;
    let mut to_arg = None;
    let mut offline = false;
    let mut format = "text".to_string();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--amount" => {
                i += 1;
                amount_arg = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--amount requires a USD value");
                    process::exit(1);
                }));
            }
            "--to" => {
                i += 1;
                to_arg = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--to requires 'GBP' or 'ZAR'");
                    process::exit(1);
                }));
            }
            "--offline" => {
                offline = true;
            }
            "--format" => {
                i += 1;
                format = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--format requires 'text' or 'json'");
                    process::exit(1);
                });
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let amount_str = amount_arg.unwrap_or_else(|| {
        eprintln!("Error: --amount <USD> is required");
        process::exit(1);
    });
    let amount: Decimal = amount_str.parse().unwrap_or_else(|e| {
        eprintln!("Invalid amount '{}': {}", amount_str, e);
        process::exit(1);
    });

    let to_str = to_arg.unwrap_or_else(|| {
        eprintln!("Error: --to <CURRENCY> is required");
        process::exit(1);
    });
    let corridor = Corridor::from_code(&to_str).unwrap_or_else(|| {
        eprintln!("Unsupported destination currency '{}': use GBP or ZAR", to_str);
        process::exit(1);
    });

    if let Err(err) = QuoteEngine::validate_amount(amount) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }

    let resolved = resolve_rates(offline);
    let quote = QuoteEngine::quote(amount, corridor, &resolved.table);

    if format == "json" {
        let output = QuoteOutput {
            original_amount: quote.original_amount.to_string(),
            fee_percentage: quote.fee_percentage.to_string(),
            fee: quote.fee.to_string(),
            amount_after_fee: quote.amount_after_fee.to_string(),
            exchange_rate: quote.exchange_rate.to_string(),
            final_amount: quote.final_amount.to_string(),
            currency: quote.currency.code().to_string(),
            country: quote.country.clone(),
            live_rates: resolved.is_live(),
        };
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
    } else {
        print!("{}", quote);
        if !resolved.is_live() {
            println!("Note: live rates unavailable; quote uses fixed fallback rates.");
        }
    }
}

fn cmd_rates(args: &[String]) {
    let mut offline = false;
    let mut format = "text".to_string();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--offline" => {
                offline = true;
            }
            "--format" => {
                i += 1;
                format = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--format requires 'text' or 'json'");
                    process::exit(1);
                });
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let resolved = resolve_rates(offline);

    if format == "json" {
        let output = RatesOutput {
            gbp: resolved.table.rate_for(Corridor::Gbp).to_string(),
            zar: resolved.table.rate_for(Corridor::Zar).to_string(),
            origin: if resolved.is_live() { "live" } else { "fallback" }.to_string(),
        };
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
    } else {
        println!("=== Exchange Rates (per 1 USD) ===");
        for corridor in Corridor::ALL {
            println!(
                "  {} ({}): {}",
                corridor,
                corridor.country(),
                resolved.table.rate_for(corridor)
            );
        }
        println!(
            "  Source: {}",
            if resolved.is_live() { "live" } else { "fixed fallback" }
        );
    }
}

fn cmd_history(args: &[String]) {
    let mut page = 1usize;
    let mut page_size = 5usize;
    let mut count: Option<usize> = None;
    let mut format = "text".to_string();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--page" => {
                i += 1;
                page = args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                    eprintln!("--page requires a number");
                    process::exit(1);
                });
            }
            "--page-size" => {
                i += 1;
                page_size = args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                    eprintln!("--page-size requires a number");
                    process::exit(1);
                });
            }
            "--count" => {
                i += 1;
                count = Some(args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                    eprintln!("--count requires a number");
                    process::exit(1);
                }));
            }
            "--format" => {
                i += 1;
                format = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--format requires 'text' or 'json'");
                    process::exit(1);
                });
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    if page_size == 0 {
        eprintln!("--page-size must be at least 1");
        process::exit(1);
    }

    let transactions = match count {
        Some(n) => newest_first(generate_history(&HistoryConfig {
            count: n,
            ..Default::default()
        })),
        None => seed_history(),
    };

    let history_page = paginate(&transactions, page, page_size);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&history_page).unwrap());
    } else {
        println!(
            "=== Transfer History (page {} of {}, {} total) ===",
            history_page.page, history_page.total_pages, history_page.total_count
        );
        for txn in &history_page.transactions {
            println!(
                "  {}  {:<20} {:>12}  {:<14} {}  [{}]",
                format_date(txn.date()),
                txn.recipient(),
                format_amount(txn.amount(), txn.currency()),
                txn.country(),
                txn.reference(),
                txn.status()
            );
        }
        if history_page.transactions.is_empty() {
            println!("  (no transfers)");
        }
    }
}

fn cmd_generate(args: &[String]) {
    let mut count = 15usize;
    let mut output_path: Option<String> = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--count" => {
                i += 1;
                count = args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                    eprintln!("--count requires a number");
                    process::exit(1);
                });
            }
            "--output" => {
                i += 1;
                output_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--output requires a file path");
                    process::exit(1);
                }));
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let transactions: Vec<Transaction> = newest_first(generate_history(&HistoryConfig {
        count,
        ..Default::default()
    }));

    let json = serde_json::to_string_pretty(&transactions).unwrap();

    if let Some(path) = output_path {
        fs::write(&path, &json).unwrap_or_else(|e| {
            eprintln!("Error writing to '{}': {}", path, e);
            process::exit(1);
        });
        eprintln!("Generated {} transfers → {}", transactions.len(), path);
    } else {
        println!("{}", json);
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "quote" => cmd_quote(rest),
        "rates" => cmd_rates(rest),
        "history" => cmd_history(rest),
        "generate" => cmd_generate(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
