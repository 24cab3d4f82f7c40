use serde::{Deserialize, Serialize};

/// Who pays for heating, and with what fuel.
///
/// The rent adjustment attributable to heating is not entered by the user;
/// it is looked up from the active [`PolicyYearConfig`](crate::PolicyYearConfig)
/// using this selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeatingSource {
    /// The tenant pays for heating directly.
    Tenant,
    /// The landlord pays for electric heating.
    Electricity,
    /// The landlord pays for gas heating.
    Gas,
    /// The landlord pays for oil heating.
    Oil,
}

impl HeatingSource {
    pub const ALL: [HeatingSource; 4] = [
        HeatingSource::Tenant,
        HeatingSource::Electricity,
        HeatingSource::Gas,
        HeatingSource::Oil,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tenant => "tenant",
            Self::Electricity => "electricity",
            Self::Gas => "gas",
            Self::Oil => "oil",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "tenant" => Some(Self::Tenant),
            "electricity" => Some(Self::Electricity),
            "gas" => Some(Self::Gas),
            "oil" => Some(Self::Oil),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_round_trips_every_source() {
        for source in HeatingSource::ALL {
            assert_eq!(HeatingSource::parse(source.as_str()), Some(source));
        }
    }

    #[test]
    fn parse_rejects_unknown_code() {
        assert_eq!(HeatingSource::parse("coal"), None);
    }
}
