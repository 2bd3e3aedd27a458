use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency handled by the transfer product.
///
/// USD is the only send currency; GBP and ZAR are the receive currencies
/// of the two supported corridors.
///
/// # Examples
///
/// ```
/// use remit_engine::core::currency::Currency;
///
/// assert_eq!(Currency::Gbp.code(), "GBP");
/// assert_eq!(Currency::Gbp.symbol(), "£");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Gbp,
    Zar,
}

impl Currency {
    /// ISO 4217 code of this currency.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Gbp => "GBP",
            Currency::Zar => "ZAR",
        }
    }

    /// Display symbol used in front-of-house formatting.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Gbp => "£",
            Currency::Zar => "R",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A supported send corridor: USD in, one destination currency out.
///
/// The corridor set is closed. Every corridor carries its destination
/// currency and country label, so an unsupported destination cannot be
/// represented at all.
///
/// # Examples
///
/// ```
/// use remit_engine::core::currency::{Corridor, Currency};
///
/// let uk = Corridor::Gbp;
/// assert_eq!(uk.currency(), Currency::Gbp);
/// assert_eq!(uk.country(), "United Kingdom");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Corridor {
    Gbp,
    Zar,
}

impl Corridor {
    /// All supported corridors, in display order.
    pub const ALL: [Corridor; 2] = [Corridor::Gbp, Corridor::Zar];

    /// The currency delivered to the recipient.
    pub fn currency(&self) -> Currency {
        match self {
            Corridor::Gbp => Currency::Gbp,
            Corridor::Zar => Currency::Zar,
        }
    }

    /// Country label shown alongside quotes and transactions.
    pub fn country(&self) -> &'static str {
        match self {
            Corridor::Gbp => "United Kingdom",
            Corridor::Zar => "South Africa",
        }
    }

    /// Parse a corridor from its destination currency code.
    ///
    /// Accepts upper- or lower-case codes. Returns `None` for anything
    /// outside the supported set.
    pub fn from_code(code: &str) -> Option<Corridor> {
        match code.to_ascii_uppercase().as_str() {
            "GBP" => Some(Corridor::Gbp),
            "ZAR" => Some(Corridor::Zar),
            _ => None,
        }
    }
}

impl fmt::Display for Corridor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.currency().code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_codes() {
        assert_eq!(Currency::Usd.code(), "USD");
        assert_eq!(Currency::Gbp.code(), "GBP");
        assert_eq!(Currency::Zar.code(), "ZAR");
    }

    #[test]
    fn test_currency_symbols() {
        assert_eq!(Currency::Usd.symbol(), "$");
        assert_eq!(Currency::Gbp.symbol(), "£");
        assert_eq!(Currency::Zar.symbol(), "R");
    }

    #[test]
    fn test_corridor_country() {
        assert_eq!(Corridor::Gbp.country(), "United Kingdom");
        assert_eq!(Corridor::Zar.country(), "South Africa");
    }

    #[test]
    fn test_corridor_from_code() {
        assert_eq!(Corridor::from_code("GBP"), Some(Corridor::Gbp));
        assert_eq!(Corridor::from_code("zar"), Some(Corridor::Zar));
        assert_eq!(Corridor::from_code("EUR"), None);
        assert_eq!(Corridor::from_code(""), None);
    }

    #[test]
    fn test_corridor_display() {
        assert_eq!(format!("{}", Corridor::Gbp), "GBP");
        assert_eq!(format!("{}", Corridor::Zar), "ZAR");
    }

    #[test]
    fn test_serde_uses_currency_codes() {
        let json = serde_json::to_string(&Corridor::Zar).unwrap();
        assert_eq!(json, "\"ZAR\"");
        let back: Corridor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Corridor::Zar);
    }
}
