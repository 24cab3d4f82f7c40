use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::HeatingSource;

/// Errors for rule sets that cannot be used for estimation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyConfigError {
    /// The policy year is outside any plausible publication range.
    #[error("policy year {0} is out of range")]
    InvalidYear(i32),

    /// A heating coefficient must be a small signed fraction of the rent.
    #[error("heating coefficient for {source} must be between -1 and 1, got {value}")]
    InvalidHeatingCoefficient {
        source: &'static str,
        value: Decimal,
    },

    /// The improvement rate must be a fraction strictly between 0 and 1.
    #[error("improvement rate must be between 0 and 1 exclusive, got {0}")]
    InvalidImprovementRate(Decimal),
}

/// The adjustment rule set published for one policy year.
///
/// Coefficients change every year, so they are data rather than code: a
/// config is built from the bundled table or a user-supplied CSV and passed
/// explicitly to the calculation. Nothing in the estimator infers the active
/// year from the clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyYearConfig {
    pub policy_year: i32,

    /// Applied to the monthly rent when the tenant pays for heating.
    pub heat_tenant: Decimal,
    /// Applied when the landlord pays for electric heating.
    pub heat_electricity: Decimal,
    /// Applied when the landlord pays for gas heating.
    pub heat_gas: Decimal,
    /// Applied when the landlord pays for oil heating.
    pub heat_oil: Decimal,

    /// Fraction of amortized major-work costs counted toward the monthly
    /// adjustment.
    pub improvement_rate: Decimal,
}

impl PolicyYearConfig {
    /// The coefficient applied to the monthly rent for the given heating
    /// arrangement.
    pub fn heating_coefficient(&self, source: HeatingSource) -> Decimal {
        match source {
            HeatingSource::Tenant => self.heat_tenant,
            HeatingSource::Electricity => self.heat_electricity,
            HeatingSource::Gas => self.heat_gas,
            HeatingSource::Oil => self.heat_oil,
        }
    }

    /// Checks that every rate in the rule set is usable.
    pub fn validate(&self) -> Result<(), PolicyConfigError> {
        if self.policy_year < 1900 || self.policy_year > 2999 {
            return Err(PolicyConfigError::InvalidYear(self.policy_year));
        }

        for source in HeatingSource::ALL {
            let value = self.heating_coefficient(source);
            if value.abs() >= Decimal::ONE {
                return Err(PolicyConfigError::InvalidHeatingCoefficient {
                    source: source.as_str(),
                    value,
                });
            }
        }

        if self.improvement_rate <= Decimal::ZERO || self.improvement_rate >= Decimal::ONE {
            return Err(PolicyConfigError::InvalidImprovementRate(
                self.improvement_rate,
            ));
        }

        Ok(())
    }
}
