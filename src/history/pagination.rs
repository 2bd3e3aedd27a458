use crate::core::transaction::Transaction;
use serde::Serialize;

/// One page of transfer history.
///
/// Pages are 1-based. The source list's order is preserved; callers are
/// expected to hand over history newest-first (see [`newest_first`]).
#[derive(Debug, Clone, Serialize)]
pub struct HistoryPage {
    /// The page actually returned (after clamping).
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
    pub transactions: Vec<Transaction>,
}

impl HistoryPage {
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

/// Sort transactions newest-first.
pub fn newest_first(mut transactions: Vec<Transaction>) -> Vec<Transaction> {
    transactions.sort_by(|a, b| b.date().cmp(&a.date()));
    transactions
}

/// Slice one page out of a transfer history.
///
/// A page number past the end clamps to the last page; page 0 clamps to
/// page 1. An empty history yields a single empty page.
///
/// # Panics
///
/// Panics if `page_size` is zero.
///
/// # Examples
///
/// ```
/// use remit_engine::history::pagination::paginate;
/// use remit_engine::history::seed::seed_history;
///
/// let history = seed_history();
/// let page = paginate(&history, 1, 5);
/// assert_eq!(page.transactions.len(), 5);
/// assert_eq!(page.total_pages, 3);
/// ```
pub fn paginate(transactions: &[Transaction], page: usize, page_size: usize) -> HistoryPage {
    assert!(page_size > 0, "page size must be positive");

    let total_count = transactions.len();
    let total_pages = total_count.div_ceil(page_size);
    let page = page.clamp(1, total_pages.max(1));

    let start = (page - 1) * page_size;
    let items = transactions
        .iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    HistoryPage {
        page,
        page_size,
        total_count,
        total_pages,
        transactions: items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::currency::Currency;
    use chrono::{Duration, TimeZone, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn history_of(n: usize) -> Vec<Transaction> {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        (0..n)
            .map(|i| {
                Transaction::new(
                    dec!(100) + Decimal::from(i as u64),
                    Currency::Gbp,
                    "United Kingdom",
                    format!("Recipient {i}"),
                    base + Duration::hours(i as i64),
                )
            })
            .collect()
    }

    #[test]
    fn test_first_page() {
        let history = history_of(12);
        let page = paginate(&history, 1, 5);
        assert_eq!(page.page, 1);
        assert_eq!(page.transactions.len(), 5);
        assert_eq!(page.total_count, 12);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_next());
        assert!(!page.has_previous());
    }

    #[test]
    fn test_last_page_is_partial() {
        let history = history_of(12);
        let page = paginate(&history, 3, 5);
        assert_eq!(page.transactions.len(), 2);
        assert!(!page.has_next());
        assert!(page.has_previous());
    }

    #[test]
    fn test_out_of_range_page_clamps_to_last() {
        let history = history_of(12);
        let page = paginate(&history, 99, 5);
        assert_eq!(page.page, 3);
        assert_eq!(page.transactions.len(), 2);
    }

    #[test]
    fn test_page_zero_clamps_to_first() {
        let history = history_of(12);
        let page = paginate(&history, 0, 5);
        assert_eq!(page.page, 1);
    }

    #[test]
    fn test_empty_history() {
        let page = paginate(&[], 1, 5);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_count, 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.transactions.is_empty());
        assert!(!page.has_next());
        assert!(!page.has_previous());
    }

    #[test]
    fn test_exact_multiple_has_no_ragged_page() {
        let history = history_of(10);
        let page = paginate(&history, 2, 5);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.transactions.len(), 5);
    }

    #[test]
    fn test_newest_first_ordering() {
        let history = newest_first(history_of(3));
        assert!(history[0].date() > history[1].date());
        assert!(history[1].date() > history[2].date());
    }

    #[test]
    #[should_panic(expected = "page size must be positive")]
    fn test_zero_page_size_rejected() {
        paginate(&[], 1, 0);
    }
}
