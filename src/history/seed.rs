//! Demo data for the dashboard: a fixed transfer history, a random
//! history generator, and the promotional carousel slides.
//!
//! Nothing here feeds the quoting engine. It exists so the front-end
//! has something realistic to page through before any real transfer is
//! recorded.

use crate::core::currency::{Corridor, Currency};
use crate::core::quote::QuoteEngine;
use crate::core::transaction::{Transaction, TransactionStatus};
use crate::rates::table::RateTable;
use chrono::{Duration, TimeZone, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Recipient names used by the random generator.
const RECIPIENTS: [&str; 5] = [
    "Alice Johnson",
    "Michael Smith",
    "Sarah Williams",
    "David Brown",
    "Emma Davis",
];

/// Configuration for generating a random transfer history.
#[derive(Debug, Clone)]
pub struct HistoryConfig {
    /// Number of transactions to generate.
    pub count: usize,
    /// Corridors to draw from.
    pub corridors: Vec<Corridor>,
    /// Minimum USD send amount.
    pub min_send_usd: Decimal,
    /// Maximum USD send amount.
    pub max_send_usd: Decimal,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            count: 15,
            corridors: Corridor::ALL.to_vec(),
            min_send_usd: crate::core::quote::MIN_SEND_USD,
            max_send_usd: crate::core::quote::MAX_SEND_USD,
        }
    }
}

/// Generate a random transfer history, newest first.
///
/// Amounts are drawn from the accepted send range and priced through the
/// quoting engine against the fallback rates, so every generated payout
/// is one the product could actually have delivered. Roughly one in ten
/// records lands as pending and one in ten as failed.
pub fn generate_history(config: &HistoryConfig) -> Vec<Transaction> {
    let mut rng = rand::thread_rng();
    let rates = RateTable::fallback();
    let now = Utc::now();

    let mut transactions = Vec::with_capacity(config.count);
    for i in 0..config.count {
        let corridor = config.corridors[rng.gen_range(0..config.corridors.len())];

        let min: f64 = config.min_send_usd.to_string().parse().unwrap_or(10.0);
        let max: f64 = config.max_send_usd.to_string().parse().unwrap_or(2000.0);
        let send_usd = Decimal::from_f64_retain(rng.gen_range(min..max))
            .unwrap_or(Decimal::from(100))
            .round_dp(2);

        let quote = QuoteEngine::quote(send_usd, corridor, &rates);
        let recipient = RECIPIENTS[rng.gen_range(0..RECIPIENTS.len())];
        // Spread records backwards in time, newest first.
        let date = now - Duration::days(3 * i as i64) - Duration::minutes(rng.gen_range(0..1440));

        let status = match rng.gen_range(0..10) {
            0 => TransactionStatus::Pending,
            1 => TransactionStatus::Failed,
            _ => TransactionStatus::Completed,
        };

        transactions.push(
            Transaction::new(
                quote.final_amount,
                quote.currency,
                quote.country.clone(),
                recipient,
                date,
            )
            .with_status(status),
        );
    }

    transactions
}

/// The fixed demo history shown to a fresh account, newest first.
pub fn seed_history() -> Vec<Transaction> {
    let gbp = |amount: i64, y: i32, mo: u32, d: u32, h: u32, mi: u32, recipient: &str| {
        Transaction::new(
            Decimal::from(amount),
            Currency::Gbp,
            "United Kingdom",
            recipient,
            Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap(),
        )
    };
    let zar = |amount: i64, y: i32, mo: u32, d: u32, h: u32, mi: u32, recipient: &str| {
        Transaction::new(
            Decimal::from(amount),
            Currency::Zar,
            "South Africa",
            recipient,
            Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap(),
        )
    };

    vec![
        gbp(850, 2024, 1, 15, 10, 30, "Sarah Mukamuri").with_reference("WM2024011501"),
        zar(12500, 2024, 1, 12, 14, 22, "David Chikwanha").with_reference("WM2024011202"),
        gbp(650, 2024, 1, 8, 9, 15, "Grace Mpofu").with_reference("WM2024010803"),
        zar(8900, 2024, 1, 5, 16, 45, "Takudzwa Ncube").with_reference("WM2024010504"),
        gbp(750, 2024, 1, 3, 11, 20, "Tendai Moyo").with_reference("WM2024010305"),
        zar(11200, 2023, 12, 28, 13, 33, "Chipo Mazvimbakupa").with_reference("WM2023122806"),
        gbp(950, 2023, 12, 25, 8, 10, "Michael Sibanda").with_reference("WM2023122507"),
        zar(7800, 2023, 12, 22, 15, 55, "Promise Mutasa").with_reference("WM2023122208"),
        gbp(680, 2023, 12, 20, 12, 40, "Rutendo Zimunya")
            .with_reference("WM2023122009")
            .with_status(TransactionStatus::Pending),
        zar(9500, 2023, 12, 18, 17, 25, "Blessing Madzivire").with_reference("WM2023121810"),
        gbp(820, 2023, 12, 15, 10, 15, "Farai Gumbo").with_reference("WM2023121511"),
        zar(6700, 2023, 12, 12, 14, 30, "Natasha Chinomona").with_reference("WM2023121212"),
        gbp(710, 2023, 12, 10, 9, 50, "Tinashe Makoni").with_reference("WM2023121013"),
        zar(8300, 2023, 12, 8, 16, 12, "Vimbai Chakanyuka")
            .with_reference("WM2023120814")
            .with_status(TransactionStatus::Failed),
        gbp(890, 2023, 12, 5, 11, 35, "Tapiwanashe Muza").with_reference("WM2023120515"),
    ]
}

/// A promotional carousel slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdSlide {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub cta_text: String,
    pub cta_link: String,
}

/// The carousel content shown on the dashboard.
pub fn sample_ads() -> Vec<AdSlide> {
    vec![
        AdSlide {
            id: "1".to_string(),
            title: "Student Discounts Available".to_string(),
            description: "Get 20% off your next transfer when sending to university cities. \
                          Perfect for those end-of-term expenses!"
                .to_string(),
            image_url: "student-discount-hero.jpg".to_string(),
            cta_text: "Learn More".to_string(),
            cta_link: "#".to_string(),
        },
        AdSlide {
            id: "2".to_string(),
            title: "Refer a Friend Program".to_string(),
            description: "Know other parents sending money abroad? Refer them and both of you \
                          get $10 credit on your next transfer."
                .to_string(),
            image_url: "referral-program-hero.jpg".to_string(),
            cta_text: "Start Referring".to_string(),
            cta_link: "#".to_string(),
        },
        AdSlide {
            id: "3".to_string(),
            title: "Mobile App Coming Soon".to_string(),
            description: "Send money on the go with our upcoming mobile app. Get notified when \
                          it launches for early access!"
                .to_string(),
            image_url: "mobile-app-hero.jpg".to_string(),
            cta_text: "Get Notified".to_string(),
            cta_link: "#".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_history_shape() {
        let history = seed_history();
        assert_eq!(history.len(), 15);
        // Newest first.
        for pair in history.windows(2) {
            assert!(pair[0].date() > pair[1].date());
        }
    }

    #[test]
    fn test_seed_history_statuses() {
        let history = seed_history();
        let pending = history
            .iter()
            .filter(|t| t.status() == TransactionStatus::Pending)
            .count();
        let failed = history
            .iter()
            .filter(|t| t.status() == TransactionStatus::Failed)
            .count();
        assert_eq!(pending, 1);
        assert_eq!(failed, 1);
    }

    #[test]
    fn test_generated_history_length_and_bounds() {
        let config = HistoryConfig {
            count: 40,
            ..Default::default()
        };
        let history = generate_history(&config);
        assert_eq!(history.len(), 40);
        for txn in &history {
            assert!(txn.amount() > Decimal::ZERO);
            assert!(matches!(txn.currency(), Currency::Gbp | Currency::Zar));
        }
    }

    #[test]
    fn test_generated_history_respects_corridor_filter() {
        let config = HistoryConfig {
            count: 20,
            corridors: vec![Corridor::Zar],
            ..Default::default()
        };
        let history = generate_history(&config);
        assert!(history.iter().all(|t| t.currency() == Currency::Zar));
        assert!(history.iter().all(|t| t.country() == "South Africa"));
    }

    #[test]
    fn test_sample_ads() {
        let ads = sample_ads();
        assert_eq!(ads.len(), 3);
        assert!(ads.iter().all(|ad| !ad.title.is_empty()));
    }
}
