mod form;

pub use form::{AmountField, EstimateFormState, FieldError, MAX_DWELLINGS};
