use std::io::Read;

use rent_core::{PolicyConfigError, PolicyYearConfig};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading policy table data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyTableError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("duplicate policy year {0}")]
    DuplicateYear(i32),

    #[error("invalid rule set for policy year {year}: {source}")]
    InvalidConfig {
        year: i32,
        #[source]
        source: PolicyConfigError,
    },

    #[error("no policy years defined")]
    Empty,
}

impl From<csv::Error> for PolicyTableError {
    fn from(err: csv::Error) -> Self {
        PolicyTableError::CsvParse(err.to_string())
    }
}

/// A single record from the policy table CSV file.
///
/// The CSV columns are:
/// - `policy_year`: the year the rule set applies to (e.g., 2021)
/// - `heat_tenant`: rent coefficient when the tenant pays for heating
/// - `heat_electricity`: coefficient for landlord-paid electric heating
/// - `heat_gas`: coefficient for landlord-paid gas heating
/// - `heat_oil`: coefficient for landlord-paid oil heating
/// - `improvement_rate`: fraction applied to amortized major-work costs
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PolicyYearRecord {
    pub policy_year: i32,
    pub heat_tenant: Decimal,
    pub heat_electricity: Decimal,
    pub heat_gas: Decimal,
    pub heat_oil: Decimal,
    pub improvement_rate: Decimal,
}

impl From<PolicyYearRecord> for PolicyYearConfig {
    fn from(record: PolicyYearRecord) -> Self {
        PolicyYearConfig {
            policy_year: record.policy_year,
            heat_tenant: record.heat_tenant,
            heat_electricity: record.heat_electricity,
            heat_gas: record.heat_gas,
            heat_oil: record.heat_oil,
            improvement_rate: record.improvement_rate,
        }
    }
}

/// Loader for policy table data from CSV files.
pub struct PolicyTableLoader;

impl PolicyTableLoader {
    /// Parse policy year records from a CSV reader.
    ///
    /// Returns the raw records in file order. The reader can be any type
    /// that implements `Read`, such as a file or a string slice. Validation
    /// of the rates happens when the records are assembled into a
    /// [`PolicyTable`](crate::PolicyTable), not here.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<PolicyYearRecord>, PolicyTableError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: PolicyYearRecord = result?;
            records.push(record);
        }

        Ok(records)
    }
}
