//! Policy-year reference tables for the rent-increase estimator.
//!
//! The adjustment coefficients are published yearly, so they live in CSV
//! data rather than code. This crate parses those tables, validates them
//! into [`rent_core::PolicyYearConfig`] rule sets, and bundles the published
//! years into the binary as a default.

mod loader;
mod table;

pub use loader::{PolicyTableError, PolicyTableLoader, PolicyYearRecord};
pub use table::{PolicyTable, bundled_table};
