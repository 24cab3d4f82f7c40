pub mod calculations;
pub mod input;
pub mod models;

pub use calculations::increase::{EstimateOutcome, RentIncreaseWorksheet};
pub use input::{FieldFormat, NormalizedInput, format_value, normalize, reconcile_decimal_deletion};
pub use models::*;
