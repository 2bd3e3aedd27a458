use proptest::prelude::*;
use remit_engine::core::currency::{Corridor, Currency};
use remit_engine::core::fees::FeeSchedule;
use remit_engine::core::quote::{AmountError, QuoteEngine, MAX_SEND_USD, MIN_SEND_USD};
use remit_engine::core::transaction::Transaction;
use remit_engine::history::pagination::paginate;
use remit_engine::rates::source::table_from_document;
use remit_engine::rates::table::{RateTable, FALLBACK_GBP, FALLBACK_ZAR};
use rust_decimal::Decimal;
use serde_json::json;

/// A send amount within the accepted range, with cents precision.
fn arb_valid_amount() -> impl Strategy<Value = Decimal> {
    (1_000i64..=200_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Any amount a user might type, well outside the accepted range too.
fn arb_any_amount() -> impl Strategy<Value = Decimal> {
    (-100_000i64..=400_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_corridor() -> impl Strategy<Value = Corridor> {
    prop::sample::select(vec![Corridor::Gbp, Corridor::Zar])
}

/// A positive rate table: GBP in (0, 10], ZAR in (0, 10000].
fn arb_rate_table() -> impl Strategy<Value = RateTable> {
    (1i64..=100_000i64, 1i64..=1_000_000i64).prop_map(|(gbp, zar)| {
        RateTable::new(Decimal::new(gbp, 4), Decimal::new(zar, 2)).unwrap()
    })
}

proptest! {
    // ===================================================================
    // INVARIANT 1: Validation accepts exactly the closed range [10, 2000].
    //
    // Below the minimum fails BelowMinimum, above the maximum fails
    // AboveMaximum, and both boundary values pass.
    // ===================================================================
    #[test]
    fn validation_matches_bounds(amount in arb_any_amount()) {
        let result = QuoteEngine::validate_amount(amount);
        if amount < MIN_SEND_USD {
            prop_assert_eq!(result, Err(AmountError::BelowMinimum));
        } else if amount > MAX_SEND_USD {
            prop_assert_eq!(result, Err(AmountError::AboveMaximum));
        } else {
            prop_assert!(result.is_ok());
        }
    }

    // ===================================================================
    // INVARIANT 2: Rounded figures are whole and never undercut.
    //
    // The fee and the final payout are integers at least as large as
    // their unrounded values. Rounding is up-only, in both figures.
    // ===================================================================
    #[test]
    fn rounding_is_up_only(
        amount in arb_valid_amount(),
        corridor in arb_corridor(),
        rates in arb_rate_table(),
    ) {
        let quote = QuoteEngine::quote(amount, corridor, &rates);

        let nominal_fee = amount * quote.fee_percentage / Decimal::from(100);
        prop_assert_eq!(quote.fee, quote.fee.trunc(), "fee must be whole");
        prop_assert!(quote.fee >= nominal_fee, "fee {} < nominal {}", quote.fee, nominal_fee);
        prop_assert!(quote.fee < nominal_fee + Decimal::ONE, "fee overshoots by a unit");

        let unrounded_payout = quote.amount_after_fee * quote.exchange_rate;
        prop_assert_eq!(
            quote.final_amount,
            quote.final_amount.trunc(),
            "payout must be whole"
        );
        prop_assert!(quote.final_amount >= unrounded_payout);
        prop_assert!(quote.final_amount < unrounded_payout + Decimal::ONE);
    }

    // ===================================================================
    // INVARIANT 3: The after-fee amount is exact, not rounded.
    // ===================================================================
    #[test]
    fn after_fee_amount_is_exact(
        amount in arb_valid_amount(),
        corridor in arb_corridor(),
        rates in arb_rate_table(),
    ) {
        let quote = QuoteEngine::quote(amount, corridor, &rates);
        prop_assert_eq!(quote.amount_after_fee, amount - quote.fee);
    }

    // ===================================================================
    // INVARIANT 4: Quoting is pure. Same inputs, same quote. Always.
    // ===================================================================
    #[test]
    fn quoting_is_deterministic(
        amount in arb_valid_amount(),
        corridor in arb_corridor(),
        rates in arb_rate_table(),
    ) {
        let a = QuoteEngine::quote(amount, corridor, &rates);
        let b = QuoteEngine::quote(amount, corridor, &rates);
        prop_assert_eq!(a, b);
    }

    // ===================================================================
    // INVARIANT 5: Payout is monotone in the send amount.
    //
    // For a fixed corridor and rate table, sending more USD never
    // delivers fewer destination units.
    // ===================================================================
    #[test]
    fn payout_is_monotone(
        a in arb_valid_amount(),
        b in arb_valid_amount(),
        corridor in arb_corridor(),
        rates in arb_rate_table(),
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let quote_lo = QuoteEngine::quote(lo, corridor, &rates);
        let quote_hi = QuoteEngine::quote(hi, corridor, &rates);
        prop_assert!(
            quote_lo.final_amount <= quote_hi.final_amount,
            "payout {} for {} exceeds payout {} for {}",
            quote_lo.final_amount, lo, quote_hi.final_amount, hi
        );
    }

    // ===================================================================
    // INVARIANT 6: The quote reflects the fixed fee schedule and the
    // corridor's display metadata, whatever the rate table says.
    // ===================================================================
    #[test]
    fn quote_carries_schedule_and_metadata(
        amount in arb_valid_amount(),
        corridor in arb_corridor(),
        rates in arb_rate_table(),
    ) {
        let quote = QuoteEngine::quote(amount, corridor, &rates);
        prop_assert_eq!(
            quote.fee_percentage,
            FeeSchedule::standard().percent_for(corridor)
        );
        prop_assert_eq!(quote.exchange_rate, rates.rate_for(corridor));
        prop_assert_eq!(quote.currency, corridor.currency());
        prop_assert_eq!(quote.country, corridor.country());
        prop_assert_eq!(quote.original_amount, amount);
    }

    // ===================================================================
    // INVARIANT 7: An endpoint document never yields a non-positive
    // rate. Bad or missing values degrade to the fixed constants.
    // ===================================================================
    #[test]
    fn document_rates_always_positive(
        gbp in prop::option::of(-100.0f64..100.0f64),
        zar in prop::option::of(-100.0f64..100.0f64),
        nested in any::<bool>(),
    ) {
        let mut body = serde_json::Map::new();
        if let Some(g) = gbp {
            body.insert("GBP".to_string(), json!(g));
        }
        if let Some(z) = zar {
            body.insert("ZAR".to_string(), json!(z));
        }
        let doc = if nested {
            json!({ "rates": body })
        } else {
            serde_json::Value::Object(body)
        };

        let table = table_from_document(&doc).unwrap();
        prop_assert!(table.rate_for(Corridor::Gbp) > Decimal::ZERO);
        prop_assert!(table.rate_for(Corridor::Zar) > Decimal::ZERO);

        // Absent or non-positive values must land on the fixed constants.
        if gbp.map_or(true, |g| g <= 0.0) {
            prop_assert_eq!(table.rate_for(Corridor::Gbp), FALLBACK_GBP);
        }
        if zar.map_or(true, |z| z <= 0.0) {
            prop_assert_eq!(table.rate_for(Corridor::Zar), FALLBACK_ZAR);
        }
    }

    // ===================================================================
    // INVARIANT 8: Pagination partitions the history.
    //
    // Every record appears on exactly one page, pages never exceed the
    // requested size, and the clamped page number is always in range.
    // ===================================================================
    #[test]
    fn pagination_partitions_history(
        len in 0usize..60,
        page_size in 1usize..10,
        requested_page in 0usize..20,
    ) {
        use chrono::{Duration, TimeZone, Utc};

        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let history: Vec<Transaction> = (0..len)
            .map(|i| Transaction::new(
                Decimal::from(100 + i as u64),
                Currency::Gbp,
                "United Kingdom",
                format!("Recipient {i}"),
                base + Duration::hours(i as i64),
            ))
            .collect();

        let page = paginate(&history, requested_page, page_size);
        prop_assert!(page.transactions.len() <= page_size);
        prop_assert_eq!(page.total_count, len);
        prop_assert!(page.page >= 1);
        prop_assert!(page.page <= page.total_pages.max(1));

        let mut collected = 0;
        for p in 1..=page.total_pages.max(1) {
            collected += paginate(&history, p, page_size).transactions.len();
        }
        prop_assert_eq!(collected, len, "pages must cover the history exactly");
    }
}
