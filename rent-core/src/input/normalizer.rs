//! Cleans free-form numeric input while keeping the caret in place.
//!
//! A numeric field re-renders its canonical text on every keystroke, which
//! makes the displayed string change out from under the caret: naively
//! re-setting the text snaps the caret to the end and makes mid-string edits
//! impossible. The fix is to split the raw text at the caret, clean the two
//! halves independently, and anchor the new caret to the characters that
//! survived cleaning on the left side.
//!
//! [`normalize`] performs that split-clean-rejoin and parses the result;
//! [`reconcile_decimal_deletion`] handles the one edit that must not take
//! effect (deleting only the decimal separator of a committed value, which
//! would silently multiply it by a hundred); [`format_value`] renders a
//! committed value back into display text.
//!
//! Re-applying the returned caret position is the caller's job and must wait
//! until the cleaned text has actually been committed to the widget — apply
//! it during the next frame, not during the current one.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::calculations::common::to_fixed;
use crate::models::Locale;

/// How a field's text parses and renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldFormat {
    /// Whole numbers only (dwelling counts). Parsing stops at a decimal
    /// separator; rendering shows no decimals.
    Integer,
    /// Currency amounts. Two decimal places when rendered.
    Amount,
}

impl FieldFormat {
    fn decimal_places(&self) -> u32 {
        match self {
            Self::Integer => 0,
            Self::Amount => 2,
        }
    }
}

/// Result of normalizing one keystroke's worth of raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedInput {
    /// The surviving characters: ASCII digits and periods only.
    pub text: String,
    /// Caret position within `text`, in characters.
    pub cursor: usize,
    /// The parsed value, or `None` when nothing numeric survived. `None`
    /// means "field currently empty or invalid", never zero.
    pub value: Option<Decimal>,
}

/// Cleans `raw` and repositions the caret relative to the surviving
/// characters. `cursor` is a character index into `raw`; out-of-range values
/// clamp to the end.
pub fn normalize(raw: &str, cursor: usize, format: FieldFormat) -> NormalizedInput {
    let split = byte_offset_at(raw, cursor);
    let before = scrub(&raw[..split]);
    let after = scrub(&raw[split..]);

    // Scrubbed text is pure ASCII, so byte length == character count.
    let cursor = before.len();
    let text = before + &after;
    let value = parse_prefix(&text, format);

    NormalizedInput {
        text,
        cursor,
        value,
    }
}

/// Keeps the previous value when the user deleted only the decimal separator.
///
/// A committed amount renders as e.g. "12.34"; deleting the "." yields raw
/// text "1234", which would commit as a hundred times the intended value and
/// lose the typed cents. That edit is recognizable because the new parse
/// equals the previous value in integer cents, and is ignored.
pub fn reconcile_decimal_deletion(
    parsed: Option<Decimal>,
    previous: Option<Decimal>,
) -> Option<Decimal> {
    match (parsed, previous) {
        (Some(new), Some(previous)) if new == integer_cents(previous) => Some(previous),
        (parsed, _) => parsed,
    }
}

/// Renders a committed value as display text: no decimals for integer
/// fields, two for amounts, with the locale's decimal separator.
pub fn format_value(value: Decimal, format: FieldFormat, locale: Locale) -> String {
    let fixed = to_fixed(value, format.decimal_places());
    match locale {
        Locale::En => fixed,
        Locale::Fr => fixed.replace('.', ","),
    }
}

fn byte_offset_at(raw: &str, cursor: usize) -> usize {
    raw.char_indices().nth(cursor).map_or(raw.len(), |(i, _)| i)
}

/// Drops everything except digits and decimal separators, mapping the
/// locale's decimal comma onto a period.
fn scrub(segment: &str) -> String {
    segment
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, ',' | '.'))
        .map(|c| if c == ',' { '.' } else { c })
        .collect()
}

/// Parses the longest numeric prefix of the cleaned text: digits, then for
/// amount fields at most one period and more digits. Text the user is still
/// in the middle of typing parses by prefix ("12." is 12, "1.2.3" is 1.2);
/// text with no leading number at all parses to `None`.
fn parse_prefix(text: &str, format: FieldFormat) -> Option<Decimal> {
    let mut chars = text.chars().peekable();

    let mut int_part = String::new();
    while let Some(c) = chars.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        int_part.push(c);
        chars.next();
    }

    let mut frac_part = String::new();
    if matches!(format, FieldFormat::Amount) && chars.peek() == Some(&'.') {
        chars.next();
        while let Some(c) = chars.peek().copied() {
            if !c.is_ascii_digit() {
                break;
            }
            frac_part.push(c);
            chars.next();
        }
    }

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let int = if int_part.is_empty() { "0" } else { int_part.as_str() };
    let frac = if frac_part.is_empty() { "0" } else { frac_part.as_str() };
    format!("{int}.{frac}").parse().ok()
}

fn integer_cents(value: Decimal) -> Decimal {
    (value * Decimal::ONE_HUNDRED).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // normalize: cleaning
    // =========================================================================

    #[test]
    fn normalize_strips_non_numeric_characters() {
        let result = normalize("$1a23", 5, FieldFormat::Amount);

        assert_eq!(result.text, "123");
        assert_eq!(result.cursor, 3);
        assert_eq!(result.value, Some(dec!(123)));
    }

    #[test]
    fn normalize_strips_whitespace() {
        let result = normalize("1 234", 5, FieldFormat::Amount);

        assert_eq!(result.text, "1234");
        assert_eq!(result.cursor, 4);
        assert_eq!(result.value, Some(dec!(1234)));
    }

    #[test]
    fn normalize_maps_decimal_comma_to_period() {
        let result = normalize("12,50", 5, FieldFormat::Amount);

        assert_eq!(result.text, "12.50");
        assert_eq!(result.value, Some(dec!(12.50)));
    }

    #[test]
    fn normalize_comma_and_period_input_are_byte_identical() {
        let with_comma = normalize("1 234,56", 8, FieldFormat::Amount);
        let with_period = normalize("1 234.56", 8, FieldFormat::Amount);

        assert_eq!(with_comma.text, with_period.text);
        assert_eq!(with_comma.cursor, with_period.cursor);
        assert_eq!(with_comma.value, with_period.value);
    }

    #[test]
    fn normalize_is_idempotent_on_clean_text() {
        for (text, cursor) in [("12.50", 3), ("1234", 4), ("0.5", 1), ("", 0)] {
            let once = normalize(text, cursor, FieldFormat::Amount);
            let twice = normalize(&once.text, once.cursor, FieldFormat::Amount);

            assert_eq!(once, twice);
        }
    }

    // =========================================================================
    // normalize: caret
    // =========================================================================

    #[test]
    fn normalize_anchors_caret_to_surviving_left_half() {
        // "$1 2|34" with the caret after the 2: two characters survive on
        // the left, so the caret lands after them.
        let result = normalize("$1 234", 4, FieldFormat::Amount);

        assert_eq!(result.text, "1234");
        assert_eq!(result.cursor, 2);
    }

    #[test]
    fn normalize_deleting_one_digit_moves_caret_back_by_one() {
        let before = normalize("1234", 3, FieldFormat::Amount);
        // Backspace at position 3 removes the "3".
        let after = normalize("124", 2, FieldFormat::Amount);

        assert_eq!(after.text.len(), before.text.len() - 1);
        assert_eq!(after.cursor, before.cursor - 1);
    }

    #[test]
    fn normalize_clamps_out_of_range_caret() {
        let result = normalize("12", 10, FieldFormat::Amount);

        assert_eq!(result.cursor, 2);
    }

    #[test]
    fn normalize_handles_non_ascii_input() {
        let result = normalize("12é3", 4, FieldFormat::Amount);

        assert_eq!(result.text, "123");
        assert_eq!(result.cursor, 3);
    }

    // =========================================================================
    // normalize: parsing
    // =========================================================================

    #[test]
    fn normalize_parses_partial_amounts_by_prefix() {
        assert_eq!(
            normalize("12.", 3, FieldFormat::Amount).value,
            Some(dec!(12))
        );
        assert_eq!(
            normalize(".5", 2, FieldFormat::Amount).value,
            Some(dec!(0.5))
        );
        assert_eq!(
            normalize("1.2.3", 5, FieldFormat::Amount).value,
            Some(dec!(1.2))
        );
    }

    #[test]
    fn normalize_parses_zero_as_a_value() {
        assert_eq!(normalize("0", 1, FieldFormat::Amount).value, Some(dec!(0)));
    }

    #[test]
    fn normalize_unparseable_text_yields_none() {
        assert_eq!(normalize(".", 1, FieldFormat::Amount).value, None);
        assert_eq!(normalize("", 0, FieldFormat::Amount).value, None);
        assert_eq!(normalize("abc", 3, FieldFormat::Amount).value, None);
    }

    #[test]
    fn normalize_integer_fields_stop_at_the_separator() {
        let result = normalize("12.9", 4, FieldFormat::Integer);

        assert_eq!(result.value, Some(dec!(12)));
        // The text itself keeps what the user typed, cleaned.
        assert_eq!(result.text, "12.9");
    }

    #[test]
    fn normalize_integer_leading_zeroes_parse() {
        assert_eq!(
            normalize("007", 3, FieldFormat::Integer).value,
            Some(dec!(7))
        );
    }

    // =========================================================================
    // reconcile_decimal_deletion
    // =========================================================================

    #[test]
    fn reconcile_keeps_previous_value_when_only_separator_deleted() {
        // "12.34" -> delete "." -> "1234"
        let parsed = Some(dec!(1234));

        assert_eq!(
            reconcile_decimal_deletion(parsed, Some(dec!(12.34))),
            Some(dec!(12.34))
        );
    }

    #[test]
    fn reconcile_passes_through_ordinary_edits() {
        assert_eq!(
            reconcile_decimal_deletion(Some(dec!(1235)), Some(dec!(12.34))),
            Some(dec!(1235))
        );
        assert_eq!(
            reconcile_decimal_deletion(Some(dec!(5)), None),
            Some(dec!(5))
        );
        assert_eq!(reconcile_decimal_deletion(None, Some(dec!(12.34))), None);
    }

    // =========================================================================
    // format_value
    // =========================================================================

    #[test]
    fn format_value_renders_amounts_with_two_decimals() {
        assert_eq!(
            format_value(dec!(1234.5), FieldFormat::Amount, Locale::En),
            "1234.50"
        );
        assert_eq!(
            format_value(dec!(1234.5), FieldFormat::Amount, Locale::Fr),
            "1234,50"
        );
    }

    #[test]
    fn format_value_renders_integers_without_decimals() {
        assert_eq!(format_value(dec!(7), FieldFormat::Integer, Locale::En), "7");
        assert_eq!(format_value(dec!(7), FieldFormat::Integer, Locale::Fr), "7");
    }

    #[test]
    fn format_round_trips_through_normalize() {
        let shown = format_value(dec!(12.34), FieldFormat::Amount, Locale::Fr);
        let result = normalize(&shown, shown.chars().count(), FieldFormat::Amount);

        assert_eq!(result.value, Some(dec!(12.34)));
    }
}
