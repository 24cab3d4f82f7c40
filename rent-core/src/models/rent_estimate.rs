use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::to_fixed;
use crate::models::Locale;

/// Result of a rent-increase estimation.
///
/// The components are kept unrounded so callers can inspect where the total
/// comes from; only `monthly_increase` is rounded, to exactly two decimal
/// places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentEstimate {
    /// Rent times the heating coefficient for the selected arrangement.
    pub heat_adjustment: Decimal,
    /// Monthly per-dwelling share of the year-over-year municipal tax change.
    pub municipal_tax_delta: Decimal,
    /// Monthly per-dwelling share of the year-over-year school tax change.
    pub school_tax_delta: Decimal,
    /// Monthly contribution of amortized major-work costs.
    pub work_adjustment: Decimal,
    /// Sum of all components, rounded half away from zero to two decimals.
    pub monthly_increase: Decimal,
}

impl RentEstimate {
    /// A zero or negative estimate means the rent should not go up at all;
    /// the UI surfaces a notice instead of just the number.
    pub fn is_non_positive(&self) -> bool {
        self.monthly_increase <= Decimal::ZERO
    }

    /// The total with exactly two decimal places, using the locale's decimal
    /// separator ("33.00" in English, "33,00" in French).
    pub fn formatted_total(&self, locale: Locale) -> String {
        let fixed = to_fixed(self.monthly_increase, 2);
        match locale {
            Locale::En => fixed,
            Locale::Fr => fixed.replace('.', ","),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn estimate(total: Decimal) -> RentEstimate {
        RentEstimate {
            heat_adjustment: Decimal::ZERO,
            municipal_tax_delta: Decimal::ZERO,
            school_tax_delta: Decimal::ZERO,
            work_adjustment: Decimal::ZERO,
            monthly_increase: total,
        }
    }

    #[test]
    fn formatted_total_pads_to_two_decimals() {
        assert_eq!(estimate(dec!(33)).formatted_total(Locale::En), "33.00");
    }

    #[test]
    fn formatted_total_uses_decimal_comma_in_french() {
        assert_eq!(estimate(dec!(33.5)).formatted_total(Locale::Fr), "33,50");
    }

    #[test]
    fn non_positive_covers_zero_and_negative() {
        assert!(estimate(Decimal::ZERO).is_non_positive());
        assert!(estimate(dec!(-0.33)).is_non_positive());
        assert!(!estimate(dec!(0.01)).is_non_positive());
    }
}
