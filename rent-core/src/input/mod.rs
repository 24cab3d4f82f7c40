//! Keystroke-level normalization for numeric form fields.

mod normalizer;

pub use normalizer::{
    FieldFormat, NormalizedInput, format_value, normalize, reconcile_decimal_deletion,
};
