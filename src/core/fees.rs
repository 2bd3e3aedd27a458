use crate::core::currency::Corridor;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fixed fee schedule: the percentage of the USD send amount retained
/// as the transfer fee, per corridor.
///
/// The schedule is a configuration constant of the product (10% to the
/// United Kingdom, 20% to South Africa), not something users can edit.
///
/// # Examples
///
/// ```
/// use remit_engine::core::currency::Corridor;
/// use remit_engine::core::fees::FeeSchedule;
/// use rust_decimal_macros::dec;
///
/// let schedule = FeeSchedule::standard();
/// assert_eq!(schedule.percent_for(Corridor::Gbp), dec!(10));
/// assert_eq!(schedule.percent_for(Corridor::Zar), dec!(20));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    gbp_percent: Decimal,
    zar_percent: Decimal,
}

impl FeeSchedule {
    /// The standard product schedule: GBP 10%, ZAR 20%.
    pub fn standard() -> Self {
        Self {
            gbp_percent: Decimal::from(10),
            zar_percent: Decimal::from(20),
        }
    }

    /// Fee percentage applied on the given corridor.
    pub fn percent_for(&self, corridor: Corridor) -> Decimal {
        match corridor {
            Corridor::Gbp => self.gbp_percent,
            Corridor::Zar => self.zar_percent,
        }
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_standard_schedule() {
        let schedule = FeeSchedule::standard();
        assert_eq!(schedule.percent_for(Corridor::Gbp), dec!(10));
        assert_eq!(schedule.percent_for(Corridor::Zar), dec!(20));
    }

    #[test]
    fn test_default_is_standard() {
        assert_eq!(FeeSchedule::default(), FeeSchedule::standard());
    }
}
