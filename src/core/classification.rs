use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::BillingError;

/// Client category selecting the tariff schedule.
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    #[display("residential")]
    Residential,

    #[display("commercial")]
    Commercial,
}

impl Classification {
    pub const ALL: [Self; 2] = [Self::Residential, Self::Commercial];
}

/// Case-insensitive, surrounding whitespace is ignored.
impl FromStr for Classification {
    type Err = BillingError;

    fn from_str(classification: &str) -> Result<Self, Self::Err> {
        let trimmed = classification.trim();
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.to_string().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| BillingError::UnknownClassification(classification.to_owned()))
    }
}

/// What to do with a classification that is neither residential nor commercial.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownClassification {
    /// Fail with [`BillingError::UnknownClassification`].
    #[default]
    Reject,

    /// Bill it as residential.
    Residential,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!("residential".parse::<Classification>(), Ok(Classification::Residential));
        assert_eq!("Commercial".parse::<Classification>(), Ok(Classification::Commercial));
        assert_eq!(" RESIDENTIAL ".parse::<Classification>(), Ok(Classification::Residential));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "industrial".parse::<Classification>(),
            Err(BillingError::UnknownClassification("industrial".to_owned()))
        );
    }

    #[test]
    fn test_display_round_trip() {
        for classification in Classification::ALL {
            assert_eq!(classification.to_string().parse::<Classification>(), Ok(classification));
        }
    }
}
