mod estimate_form;
mod heating_source;
mod locale;
mod policy_year_config;
mod rent_estimate;

pub use estimate_form::EstimateForm;
pub use heating_source::HeatingSource;
pub use locale::Locale;
pub use policy_year_config::{PolicyConfigError, PolicyYearConfig};
pub use rent_estimate::RentEstimate;
