//! Shared numeric helpers for the estimate calculations.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a value to exactly two decimal places, half away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use rent_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(33.004)), dec!(33.00));
/// assert_eq!(round_half_up(dec!(33.005)), dec!(33.01));
/// assert_eq!(round_half_up(dec!(-0.335)), dec!(-0.34));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Renders a value with exactly `places` decimal places after half-away-from-
/// zero rounding, padding with zeros where the value is shorter.
pub fn to_fixed(value: Decimal, places: u32) -> String {
    let rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.prec$}", prec = places as usize)
}
