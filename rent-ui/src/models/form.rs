//! Form state for the estimator screen.
//!
//! Each numeric field owns its display buffer and its committed value; the
//! engine only ever sees the committed values, assembled into an
//! [`EstimateForm`]. Per-field validation lives here too — the engine itself
//! reports nothing finer than "not computable".

use std::sync::OnceLock;

use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use rent_core::{
    EstimateForm, FieldFormat, HeatingSource, Locale, format_value, normalize,
    reconcile_decimal_deletion,
};

/// Largest accepted dwelling count.
pub const MAX_DWELLINGS: u32 = 10_000;

/// Validation failures surfaced next to a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidAmount,
    OutOfRange,
    NotWholeNumber,
    MissingSelection,
}

/// One numeric input: what is shown, what was committed, and the caret
/// waiting to be re-applied on the next frame.
#[derive(Debug, Clone, Default)]
pub struct AmountField {
    /// Text currently displayed in the widget.
    pub buffer: String,
    /// Last committed value; `None` while the field is empty or invalid.
    pub value: Option<Decimal>,
    /// Caret position to restore after the re-rendered buffer is visible.
    pub pending_cursor: Option<usize>,
    /// Set once the field has lost focus; errors only show after that.
    pub touched: bool,
}

impl AmountField {
    /// Processes one edit of the buffer: cleans the text, commits the parsed
    /// value, re-renders the canonical display text, and schedules the caret
    /// for the next frame.
    pub fn apply_keystroke(&mut self, cursor: usize, format: FieldFormat, locale: Locale) {
        let normalized = normalize(&self.buffer, cursor, format);

        let value = match format {
            FieldFormat::Amount => reconcile_decimal_deletion(normalized.value, self.value),
            FieldFormat::Integer => normalized.value,
        };

        self.value = value;
        self.buffer = match value {
            Some(value) => format_value(value, format, locale),
            None => String::new(),
        };
        self.pending_cursor = Some(normalized.cursor);
    }

    /// Re-renders the buffer from the committed value, e.g. after a locale
    /// switch changes the decimal separator.
    pub fn refresh_display(&mut self, format: FieldFormat, locale: Locale) {
        if let Some(value) = self.value {
            self.buffer = format_value(value, format, locale);
        }
    }
}

/// Everything the user has entered so far.
#[derive(Debug, Clone, Default)]
pub struct EstimateFormState {
    pub rent: AmountField,
    pub dwellings: AmountField,
    pub heating: Option<HeatingSource>,
    pub heating_touched: bool,

    pub municipal_current: AmountField,
    pub municipal_previous: AmountField,
    pub school_current: AmountField,
    pub school_previous: AmountField,

    pub work_building: AmountField,
    pub work_dwelling: AmountField,
}

impl EstimateFormState {
    /// The committed values, shaped for the estimate engine.
    pub fn to_estimate_form(&self) -> EstimateForm {
        EstimateForm {
            rent: self.rent.value,
            dwellings: self.dwellings.value.and_then(|v| v.to_u32()),
            heating: self.heating,
            municipal_tax_current: self.municipal_current.value,
            municipal_tax_previous: self.municipal_previous.value,
            school_tax_current: self.school_current.value,
            school_tax_previous: self.school_previous.value,
            work_cost_building: self.work_building.value,
            work_cost_dwelling: self.work_dwelling.value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Re-renders every committed buffer, e.g. after a locale switch.
    pub fn refresh_displays(&mut self, locale: Locale) {
        self.rent.refresh_display(FieldFormat::Amount, locale);
        self.dwellings.refresh_display(FieldFormat::Integer, locale);
        self.municipal_current.refresh_display(FieldFormat::Amount, locale);
        self.municipal_previous.refresh_display(FieldFormat::Amount, locale);
        self.school_current.refresh_display(FieldFormat::Amount, locale);
        self.school_previous.refresh_display(FieldFormat::Amount, locale);
        self.work_building.refresh_display(FieldFormat::Amount, locale);
        self.work_dwelling.refresh_display(FieldFormat::Amount, locale);
    }

    // --- per-field validation -----------------------------------------------

    pub fn rent_error(&self) -> Option<FieldError> {
        match required_amount(&self.rent) {
            Some(error) => Some(error),
            None if self.rent.value < Some(Decimal::ONE) => Some(FieldError::OutOfRange),
            None => None,
        }
    }

    pub fn dwellings_error(&self) -> Option<FieldError> {
        let trimmed = self.dwellings.buffer.trim();
        if trimmed.is_empty() {
            return Some(FieldError::Required);
        }
        if !digits_only().is_match(trimmed) {
            return Some(FieldError::NotWholeNumber);
        }
        match self.dwellings.value {
            None => Some(FieldError::InvalidAmount),
            Some(v) if v < Decimal::ONE || v > Decimal::from(MAX_DWELLINGS) => {
                Some(FieldError::OutOfRange)
            }
            Some(_) => None,
        }
    }

    pub fn heating_error(&self) -> Option<FieldError> {
        match self.heating {
            None => Some(FieldError::MissingSelection),
            Some(_) => None,
        }
    }

    pub fn municipal_current_error(&self) -> Option<FieldError> {
        required_amount(&self.municipal_current)
    }

    pub fn municipal_previous_error(&self) -> Option<FieldError> {
        required_amount(&self.municipal_previous)
    }

    pub fn school_current_error(&self) -> Option<FieldError> {
        required_amount(&self.school_current)
    }

    pub fn school_previous_error(&self) -> Option<FieldError> {
        required_amount(&self.school_previous)
    }

    pub fn work_building_error(&self) -> Option<FieldError> {
        optional_amount(&self.work_building)
    }

    pub fn work_dwelling_error(&self) -> Option<FieldError> {
        optional_amount(&self.work_dwelling)
    }
}

fn required_amount(field: &AmountField) -> Option<FieldError> {
    match field.value {
        None if field.buffer.trim().is_empty() => Some(FieldError::Required),
        None => Some(FieldError::InvalidAmount),
        Some(_) => None,
    }
}

fn optional_amount(field: &AmountField) -> Option<FieldError> {
    match field.value {
        None if field.buffer.trim().is_empty() => None,
        None => Some(FieldError::InvalidAmount),
        Some(_) => None,
    }
}

fn digits_only() -> &'static Regex {
    static DIGITS_ONLY: OnceLock<Regex> = OnceLock::new();
    DIGITS_ONLY.get_or_init(|| Regex::new(r"^\d+$").expect("pattern is valid"))
}
