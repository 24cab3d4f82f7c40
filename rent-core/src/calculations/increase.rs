//! Rent-increase estimation from landlord cost changes.
//!
//! The estimate approximates the monthly rent adjustment a landlord could
//! justify, from four contributions:
//!
//! | Line | Description |
//! |------|-------------|
//! | 1    | Heat adjustment: monthly rent × heating coefficient |
//! | 2    | Municipal taxes: (current year − previous year) / dwellings / 12 |
//! | 3    | School taxes: (current year − previous year) / dwellings / 12 |
//! | 4    | Major work: (building cost / dwellings + dwelling cost) × improvement rate |
//! | 5    | Total: Line 1 + Line 2 + Line 3 + Line 4, rounded to two decimals |
//!
//! The heating coefficients and the improvement rate come from the active
//! [`PolicyYearConfig`]; both change from year to year.
//!
//! The calculation runs on every keystroke, so it is deliberately total: any
//! missing or unusable required field produces
//! [`EstimateOutcome::NotComputable`] instead of an error, and a zero
//! dwelling count fails closed the same way rather than dividing by zero.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use rent_core::{
//!     EstimateForm, HeatingSource, Locale, PolicyYearConfig, RentIncreaseWorksheet,
//! };
//!
//! let config = PolicyYearConfig {
//!     policy_year: 2021,
//!     heat_tenant: dec!(0.008),
//!     heat_electricity: dec!(0.005),
//!     heat_gas: dec!(-0.003),
//!     heat_oil: dec!(-0.023),
//!     improvement_rate: dec!(0.00192),
//! };
//!
//! let form = EstimateForm {
//!     rent: Some(dec!(1000)),
//!     dwellings: Some(10),
//!     heating: Some(HeatingSource::Tenant),
//!     municipal_tax_current: Some(dec!(12000)),
//!     municipal_tax_previous: Some(dec!(10000)),
//!     school_tax_current: Some(dec!(6000)),
//!     school_tax_previous: Some(dec!(5000)),
//!     ..EstimateForm::default()
//! };
//!
//! let worksheet = RentIncreaseWorksheet::new(&config).unwrap();
//! let estimate = worksheet.calculate(&form).into_estimate().unwrap();
//!
//! assert_eq!(estimate.formatted_total(Locale::En), "33.00");
//! assert!(!estimate.is_non_positive());
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::round_half_up;
use crate::models::{EstimateForm, HeatingSource, PolicyConfigError, PolicyYearConfig, RentEstimate};

/// Outcome of an estimation pass over the form.
///
/// There are exactly two cases. An incomplete form is not an error; it is
/// the normal state for most keystrokes while the user is still typing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EstimateOutcome {
    /// All required fields were present and usable.
    Ready(RentEstimate),
    /// At least one required field is missing or unusable.
    NotComputable,
}

impl EstimateOutcome {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn estimate(&self) -> Option<&RentEstimate> {
        match self {
            Self::Ready(estimate) => Some(estimate),
            Self::NotComputable => None,
        }
    }

    pub fn into_estimate(self) -> Option<RentEstimate> {
        match self {
            Self::Ready(estimate) => Some(estimate),
            Self::NotComputable => None,
        }
    }
}

/// Calculator for the rent-increase estimate under one policy-year rule set.
#[derive(Debug, Clone)]
pub struct RentIncreaseWorksheet<'a> {
    config: &'a PolicyYearConfig,
}

impl<'a> RentIncreaseWorksheet<'a> {
    /// Creates a worksheet for the given rule set, validating it once.
    pub fn new(config: &'a PolicyYearConfig) -> Result<Self, PolicyConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Runs the full estimate over the current form state.
    ///
    /// Pure and infallible: identical inputs always produce the identical
    /// outcome, and incomplete or unusable inputs produce
    /// [`EstimateOutcome::NotComputable`] rather than a partial result.
    pub fn calculate(&self, form: &EstimateForm) -> EstimateOutcome {
        let (Some(rent), Some(dwellings), Some(heating)) =
            (form.rent, form.dwellings, form.heating)
        else {
            return EstimateOutcome::NotComputable;
        };
        let (Some(municipal_current), Some(municipal_previous)) =
            (form.municipal_tax_current, form.municipal_tax_previous)
        else {
            return EstimateOutcome::NotComputable;
        };
        let (Some(school_current), Some(school_previous)) =
            (form.school_tax_current, form.school_tax_previous)
        else {
            return EstimateOutcome::NotComputable;
        };

        if dwellings == 0 {
            debug!("dwelling count is zero; refusing to estimate");
            return EstimateOutcome::NotComputable;
        }
        let dwellings = Decimal::from(dwellings);

        let heat_adjustment = self.heat_adjustment(rent, heating);
        let municipal_tax_delta =
            self.monthly_tax_delta(municipal_current, municipal_previous, dwellings);
        let school_tax_delta = self.monthly_tax_delta(school_current, school_previous, dwellings);
        let work_adjustment =
            self.work_adjustment(form.work_cost_building, form.work_cost_dwelling, dwellings);

        let total = heat_adjustment + municipal_tax_delta + school_tax_delta + work_adjustment;

        EstimateOutcome::Ready(RentEstimate {
            heat_adjustment,
            municipal_tax_delta,
            school_tax_delta,
            work_adjustment,
            monthly_increase: round_half_up(total),
        })
    }

    /// Line 1: the share of the rent attributable to the heating arrangement.
    fn heat_adjustment(&self, rent: Decimal, heating: HeatingSource) -> Decimal {
        rent * self.config.heating_coefficient(heating)
    }

    /// Lines 2 and 3: monthly per-dwelling share of a year-over-year tax
    /// change. Negative when the tax went down.
    fn monthly_tax_delta(&self, current: Decimal, previous: Decimal, dwellings: Decimal) -> Decimal {
        (current - previous) / dwellings / Decimal::from(12)
    }

    /// Line 4: amortized major-work costs. Absent costs count as zero.
    fn work_adjustment(
        &self,
        building: Option<Decimal>,
        dwelling: Option<Decimal>,
        dwellings: Decimal,
    ) -> Decimal {
        let building = building.unwrap_or(Decimal::ZERO);
        let dwelling = dwelling.unwrap_or(Decimal::ZERO);
        (building / dwellings + dwelling) * self.config.improvement_rate
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::Locale;

    fn test_config() -> PolicyYearConfig {
        PolicyYearConfig {
            policy_year: 2021,
            heat_tenant: dec!(0.008),
            heat_electricity: dec!(0.005),
            heat_gas: dec!(-0.003),
            heat_oil: dec!(-0.023),
            improvement_rate: dec!(0.00192),
        }
    }

    fn complete_form() -> EstimateForm {
        EstimateForm {
            rent: Some(dec!(1000)),
            dwellings: Some(10),
            heating: Some(HeatingSource::Tenant),
            municipal_tax_current: Some(dec!(12000)),
            municipal_tax_previous: Some(dec!(10000)),
            school_tax_current: Some(dec!(6000)),
            school_tax_previous: Some(dec!(5000)),
            work_cost_building: None,
            work_cost_dwelling: None,
        }
    }

    // =========================================================================
    // calculate tests
    // =========================================================================

    #[test]
    fn calculate_worked_example() {
        let config = test_config();
        let worksheet = RentIncreaseWorksheet::new(&config).unwrap();

        let estimate = worksheet
            .calculate(&complete_form())
            .into_estimate()
            .expect("form is complete");

        assert_eq!(estimate.heat_adjustment, dec!(8.000));
        // (12000 - 10000) / 10 / 12 = 16.67, (6000 - 5000) / 10 / 12 = 8.33
        assert_eq!(round_half_up(estimate.municipal_tax_delta), dec!(16.67));
        assert_eq!(round_half_up(estimate.school_tax_delta), dec!(8.33));
        assert_eq!(estimate.work_adjustment, dec!(0));
        assert_eq!(estimate.formatted_total(Locale::En), "33.00");
        assert!(!estimate.is_non_positive());
    }

    #[test]
    fn calculate_is_deterministic() {
        let config = test_config();
        let worksheet = RentIncreaseWorksheet::new(&config).unwrap();
        let form = complete_form();

        assert_eq!(worksheet.calculate(&form), worksheet.calculate(&form));
    }

    #[test]
    fn calculate_decreased_taxes_yield_non_positive_total() {
        let config = test_config();
        let worksheet = RentIncreaseWorksheet::new(&config).unwrap();
        let mut form = complete_form();
        form.municipal_tax_current = Some(dec!(10000));
        form.municipal_tax_previous = Some(dec!(12000));

        let estimate = worksheet
            .calculate(&form)
            .into_estimate()
            .expect("form is complete");

        // 8 - 16.67 + 8.33 = -0.33
        assert_eq!(estimate.formatted_total(Locale::En), "-0.33");
        assert!(estimate.is_non_positive());
    }

    #[test]
    fn calculate_applies_improvement_rate_to_work_costs() {
        let config = test_config();
        let worksheet = RentIncreaseWorksheet::new(&config).unwrap();
        let mut form = complete_form();
        form.work_cost_building = Some(dec!(12000));
        form.work_cost_dwelling = Some(dec!(500));

        let estimate = worksheet
            .calculate(&form)
            .into_estimate()
            .expect("form is complete");

        // (12000 / 10 + 500) * 0.00192 = 3.264
        assert_eq!(estimate.work_adjustment, dec!(3.26400));
        assert_eq!(estimate.formatted_total(Locale::En), "36.26");
    }

    #[test]
    fn calculate_treats_absent_work_costs_as_zero() {
        let config = test_config();
        let worksheet = RentIncreaseWorksheet::new(&config).unwrap();
        let mut with_zeroes = complete_form();
        with_zeroes.work_cost_building = Some(dec!(0));
        with_zeroes.work_cost_dwelling = Some(dec!(0));

        assert_eq!(
            worksheet.calculate(&complete_form()),
            worksheet.calculate(&with_zeroes)
        );
    }

    #[test]
    fn calculate_uses_the_selected_heating_coefficient() {
        let config = test_config();
        let worksheet = RentIncreaseWorksheet::new(&config).unwrap();
        let mut form = complete_form();
        form.heating = Some(HeatingSource::Oil);

        let estimate = worksheet
            .calculate(&form)
            .into_estimate()
            .expect("form is complete");

        assert_eq!(estimate.heat_adjustment, dec!(-23.000));
    }

    #[test]
    fn calculate_missing_any_required_field_is_not_computable() {
        let config = test_config();
        let worksheet = RentIncreaseWorksheet::new(&config).unwrap();

        let blanks: [fn(&mut EstimateForm); 7] = [
            |form| form.rent = None,
            |form| form.dwellings = None,
            |form| form.heating = None,
            |form| form.municipal_tax_current = None,
            |form| form.municipal_tax_previous = None,
            |form| form.school_tax_current = None,
            |form| form.school_tax_previous = None,
        ];

        for blank in blanks {
            let mut form = complete_form();
            blank(&mut form);
            assert_eq!(worksheet.calculate(&form), EstimateOutcome::NotComputable);
        }
    }

    #[test]
    fn calculate_zero_dwellings_fails_closed() {
        let config = test_config();
        let worksheet = RentIncreaseWorksheet::new(&config).unwrap();
        let mut form = complete_form();
        form.dwellings = Some(0);

        assert_eq!(worksheet.calculate(&form), EstimateOutcome::NotComputable);
    }

    #[test]
    fn calculate_empty_form_is_not_computable() {
        let config = test_config();
        let worksheet = RentIncreaseWorksheet::new(&config).unwrap();

        assert_eq!(
            worksheet.calculate(&EstimateForm::default()),
            EstimateOutcome::NotComputable
        );
    }

    // =========================================================================
    // constructor tests
    // =========================================================================

    #[test]
    fn new_rejects_invalid_rule_set() {
        let mut config = test_config();
        config.improvement_rate = dec!(1);

        let result = RentIncreaseWorksheet::new(&config);

        assert_eq!(
            result.err(),
            Some(PolicyConfigError::InvalidImprovementRate(dec!(1)))
        );
    }
}
