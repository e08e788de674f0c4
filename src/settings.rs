use std::{fmt::Debug, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    core::{Classification, PenaltyPolicy, TariffBook},
    prelude::*,
};

/// Billing rules, as maintained by the district administrator.
///
/// ```toml
/// [tariffs]
/// unknown-classification = "reject"
///
/// [tariffs.residential]
/// min-consumption = 15
/// min-rate = 30
/// tier1-limit = 25
/// tier1-rate = 2.5
/// tier2-rate = 3
///
/// [penalty]
/// rate-per-month = 0.02
/// max-rate = 0.36
/// max-months = 18
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub tariffs: TariffBook,

    #[serde(default)]
    pub penalty: PenaltyPolicy,
}

impl Settings {
    /// Read the settings, falling back to the built-in rules when the file does not exist.
    #[instrument(name = "Reading the settings…")]
    pub fn read_from<P: AsRef<Path> + Debug>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.is_file() {
            let settings = Self::from_toml(&fs::read_to_string(path)?)
                .with_context(|| format!("failed to parse `{}`", path.display()))?;
            info!("loaded");
            Ok(settings)
        } else {
            warn!("no settings file, using the built-in rules");
            Ok(Self::default())
        }
    }

    /// Parse and validate the settings.
    pub fn from_toml(text: &str) -> Result<Self> {
        let settings: Self = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    #[instrument(skip(self), name = "Writing the settings…")]
    pub fn write_to<P: AsRef<Path> + Debug>(&self, path: P) -> Result {
        fs::write(path, toml::to_string(self)?)?;
        Ok(())
    }

    /// Reject rules that would produce wrong bills, before any bill gets computed.
    pub fn validate(&self) -> Result {
        for classification in Classification::ALL {
            self.tariffs.schedule_for(classification).validate(classification)?;
        }
        self.penalty.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{BillingError, TariffSchedule, UnknownClassification},
        quantity::volume::CubicMetres,
    };

    #[test]
    fn test_empty_file_uses_defaults() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn test_parse() {
        let settings = Settings::from_toml(
            r#"
            [tariffs]
            unknown-classification = "residential"

            [tariffs.commercial]
            min-consumption = 15
            min-rate = 40
            tier1-limit = 50
            tier1-rate = 5
            tier2-rate = 6

            [penalty]
            rate-per-month = 0.03
            max-rate = 0.30
            max-months = 12
            "#,
        )
        .unwrap();
        assert_eq!(settings.tariffs.unknown_classification, UnknownClassification::Residential);
        assert_eq!(settings.tariffs.schedule_for(Classification::Residential), TariffSchedule::RESIDENTIAL);
        assert_eq!(settings.tariffs.schedule_for(Classification::Commercial).tier1_limit, CubicMetres(50.0));
        assert_eq!(settings.penalty.max_months, 12);
    }

    #[test]
    fn test_partial_penalty_table() {
        let settings = Settings::from_toml("[penalty]\nrate-per-month = 0.03\n").unwrap();
        assert_eq!(
            settings.penalty,
            PenaltyPolicy { rate_per_month: 0.03, ..PenaltyPolicy::DEFAULT },
        );
    }

    #[test]
    fn test_invalid_schedule_is_rejected() {
        let error = Settings::from_toml(
            r"
            [tariffs.residential]
            min-consumption = 30
            min-rate = 30
            tier1-limit = 25
            tier1-rate = 2.5
            tier2-rate = 3
            ",
        )
        .unwrap_err();
        assert!(matches!(
            error.downcast_ref::<BillingError>(),
            Some(BillingError::InvalidSchedule { classification: Classification::Residential, .. }),
        ));
    }

    #[test]
    fn test_serialize_round_trip() {
        let settings = Settings {
            tariffs: TariffBook::default().with(Classification::Commercial, TariffSchedule::COMMERCIAL),
            penalty: PenaltyPolicy::DEFAULT,
        };
        let text = toml::to_string(&settings).unwrap();
        assert_eq!(Settings::from_toml(&text).unwrap(), settings);
    }

    #[test]
    fn test_missing_file() {
        let settings = Settings::read_from("/nonexistent/tubig.toml").unwrap();
        assert_eq!(settings, Settings::default());
    }
}
