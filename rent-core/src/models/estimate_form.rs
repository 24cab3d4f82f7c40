use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::HeatingSource;

/// The user-entered fields of the estimator form.
///
/// Every field starts out `None` and is filled in as keystrokes produce
/// parseable numbers. The calculation only runs once all required fields are
/// present; the two work-cost fields are genuinely optional and count as zero
/// when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateForm {
    /// Monthly rent paid by the tenant.
    pub rent: Option<Decimal>,
    /// Number of dwellings in the building.
    pub dwellings: Option<u32>,
    /// Who pays for heating.
    pub heating: Option<HeatingSource>,

    /// Annual municipal taxes for the whole building, current year.
    pub municipal_tax_current: Option<Decimal>,
    /// Annual municipal taxes for the whole building, previous year.
    pub municipal_tax_previous: Option<Decimal>,

    /// Annual school taxes for the whole building, current year.
    pub school_tax_current: Option<Decimal>,
    /// Annual school taxes for the whole building, previous year.
    pub school_tax_previous: Option<Decimal>,

    /// One-time major-work cost amortized across the whole building.
    pub work_cost_building: Option<Decimal>,
    /// One-time major-work cost for this dwelling alone.
    pub work_cost_dwelling: Option<Decimal>,
}
