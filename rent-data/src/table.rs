use std::collections::BTreeMap;

use rent_core::PolicyYearConfig;

use crate::loader::{PolicyTableError, PolicyTableLoader, PolicyYearRecord};

/// The rule sets bundled into the binary: the two published coefficient
/// tables. User-supplied CSV files replace this wholesale.
const BUNDLED_CSV: &str = include_str!("../data/policy_years.csv");

/// Year-keyed collection of validated rule sets.
///
/// Construction rejects empty tables, duplicate years, and out-of-range
/// rates, so a `PolicyTable` in hand always holds at least one usable
/// [`PolicyYearConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyTable {
    years: BTreeMap<i32, PolicyYearConfig>,
}

impl PolicyTable {
    /// Assembles and validates a table from parsed CSV records.
    pub fn from_records(records: Vec<PolicyYearRecord>) -> Result<Self, PolicyTableError> {
        if records.is_empty() {
            return Err(PolicyTableError::Empty);
        }

        let mut years = BTreeMap::new();
        for record in records {
            let config: PolicyYearConfig = record.into();
            let year = config.policy_year;

            config
                .validate()
                .map_err(|source| PolicyTableError::InvalidConfig { year, source })?;

            if years.insert(year, config).is_some() {
                return Err(PolicyTableError::DuplicateYear(year));
            }
        }

        Ok(Self { years })
    }

    /// The rule set for a specific policy year, if the table defines one.
    pub fn get(&self, year: i32) -> Option<&PolicyYearConfig> {
        self.years.get(&year)
    }

    /// The most recent rule set in the table.
    pub fn latest(&self) -> Option<&PolicyYearConfig> {
        self.years.values().next_back()
    }

    /// Every defined policy year, ascending.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.years.keys().copied()
    }

    /// Every rule set, ascending by year.
    pub fn iter(&self) -> impl Iterator<Item = &PolicyYearConfig> {
        self.years.values()
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}

/// The table compiled into the binary.
pub fn bundled_table() -> Result<PolicyTable, PolicyTableError> {
    PolicyTable::from_records(PolicyTableLoader::parse(BUNDLED_CSV.as_bytes())?)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn record(year: i32) -> PolicyYearRecord {
        PolicyYearRecord {
            policy_year: year,
            heat_tenant: dec!(0.008),
            heat_electricity: dec!(0.005),
            heat_gas: dec!(-0.003),
            heat_oil: dec!(-0.023),
            improvement_rate: dec!(0.00192),
        }
    }

    #[test]
    fn from_records_indexes_by_year() {
        let table = PolicyTable::from_records(vec![record(2022), record(2021)])
            .expect("records are valid");

        assert_eq!(table.len(), 2);
        assert_eq!(table.get(2021).map(|c| c.policy_year), Some(2021));
        assert_eq!(table.get(2020), None);
        assert_eq!(table.years().collect::<Vec<_>>(), vec![2021, 2022]);
    }

    #[test]
    fn latest_is_the_highest_year() {
        let table = PolicyTable::from_records(vec![record(2021), record(2022)])
            .expect("records are valid");

        assert_eq!(table.latest().map(|c| c.policy_year), Some(2022));
    }

    #[test]
    fn from_records_rejects_empty_input() {
        assert_eq!(
            PolicyTable::from_records(Vec::new()),
            Err(PolicyTableError::Empty)
        );
    }

    #[test]
    fn from_records_rejects_duplicate_years() {
        assert_eq!(
            PolicyTable::from_records(vec![record(2021), record(2021)]),
            Err(PolicyTableError::DuplicateYear(2021))
        );
    }

    #[test]
    fn from_records_rejects_invalid_rates() {
        let mut bad = record(2021);
        bad.improvement_rate = dec!(2);

        let err = PolicyTable::from_records(vec![bad]).expect_err("rate is out of range");

        assert!(matches!(
            err,
            PolicyTableError::InvalidConfig { year: 2021, .. }
        ));
    }

    #[test]
    fn bundled_table_is_valid_and_covers_both_published_years() {
        let table = bundled_table().expect("bundled table must validate");

        assert_eq!(table.years().collect::<Vec<_>>(), vec![2021, 2022]);
        assert_eq!(
            table.get(2021).map(|c| c.improvement_rate),
            Some(dec!(0.00192))
        );
        assert_eq!(
            table.get(2022).map(|c| c.improvement_rate),
            Some(dec!(0.00167))
        );
    }
}
