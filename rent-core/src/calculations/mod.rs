//! Calculation logic for the rent-increase estimate.

pub mod common;
pub mod increase;

pub use increase::{EstimateOutcome, RentIncreaseWorksheet};
