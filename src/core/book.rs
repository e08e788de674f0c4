use serde::{Deserialize, Serialize};

use crate::{
    core::{
        classification::{Classification, UnknownClassification},
        error::Result,
        tariff::TariffSchedule,
    },
    prelude::{debug, instrument, warn},
    quantity::{cost::Pesos, volume::CubicMetres},
};

/// Tariff schedules per classification.
///
/// Missing entries fall back to [`TariffSchedule::default_for`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TariffBook {
    #[serde(default)]
    pub unknown_classification: UnknownClassification,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub residential: Option<TariffSchedule>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commercial: Option<TariffSchedule>,
}

impl TariffBook {
    /// Book with every classification spelled out, as written by `tubig defaults`.
    #[must_use]
    pub const fn built_in() -> Self {
        Self {
            unknown_classification: UnknownClassification::Reject,
            residential: Some(TariffSchedule::RESIDENTIAL),
            commercial: Some(TariffSchedule::COMMERCIAL),
        }
    }

    pub const fn get(&self, classification: Classification) -> Option<TariffSchedule> {
        match classification {
            Classification::Residential => self.residential,
            Classification::Commercial => self.commercial,
        }
    }

    #[must_use]
    pub const fn with(mut self, classification: Classification, schedule: TariffSchedule) -> Self {
        match classification {
            Classification::Residential => self.residential = Some(schedule),
            Classification::Commercial => self.commercial = Some(schedule),
        }
        self
    }

    #[must_use]
    pub const fn with_unknown_classification(mut self, policy: UnknownClassification) -> Self {
        self.unknown_classification = policy;
        self
    }

    /// Schedule in effect for the classification, after the fallbacks.
    pub fn schedule_for(&self, classification: Classification) -> TariffSchedule {
        self.get(classification).unwrap_or_else(|| TariffSchedule::default_for(classification))
    }
}

/// Resolve the schedule of a client classification.
///
/// The order is: parse the classification, take the book entry, otherwise the built-in schedule
/// of the classification. An unrecognized classification is either rejected or billed as
/// residential, depending on [`TariffBook::unknown_classification`]. The resolved schedule is
/// validated before it is returned.
pub fn resolve_schedule(
    classification: &str,
    book: Option<&TariffBook>,
) -> Result<(Classification, TariffSchedule)> {
    let book = book.copied().unwrap_or_default();
    let classification = match classification.parse::<Classification>() {
        Ok(classification) => classification,
        Err(error) => match book.unknown_classification {
            UnknownClassification::Reject => return Err(error),
            UnknownClassification::Residential => {
                warn!(classification, "unknown classification, billing as residential");
                Classification::Residential
            }
        },
    };
    let schedule = book.schedule_for(classification);
    schedule.validate(classification)?;
    Ok((classification, schedule))
}

/// Bill amount for the consumption of a client of the classification.
#[instrument(level = "debug", skip(book))]
pub fn compute_bill_amount(
    classification: &str,
    consumption: CubicMetres,
    book: Option<&TariffBook>,
) -> Result<Pesos> {
    let (classification, schedule) = resolve_schedule(classification, book)?;
    let amount = schedule.bill_amount(consumption)?;
    debug!(%classification, %amount, "billed");
    Ok(amount)
}

/// Consumption that would have been billed the amount.
#[instrument(level = "debug", skip(book))]
pub fn compute_consumption_from_amount(
    classification: &str,
    amount: Pesos,
    book: Option<&TariffBook>,
) -> Result<CubicMetres> {
    let (classification, schedule) = resolve_schedule(classification, book)?;
    let consumption = schedule.consumption_for(amount)?;
    debug!(%classification, %consumption, "inverted");
    Ok(consumption)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{
        core::{error::BillingError, tariff::Tier},
        quantity::price::PesosPerCubicMetre,
    };

    #[test]
    fn test_defaults_without_book() {
        assert_abs_diff_eq!(compute_bill_amount("residential", CubicMetres(20.0), None).unwrap().0, 42.5);
        assert_abs_diff_eq!(compute_bill_amount("COMMERCIAL", CubicMetres(30.0), None).unwrap().0, 120.0);
    }

    #[test]
    fn test_book_entry_overrides_default() {
        let book = TariffBook::default().with(
            Classification::Commercial,
            TariffSchedule { tier1_limit: CubicMetres(50.0), ..TariffSchedule::COMMERCIAL },
        );
        // 40 + 15 × 5, still in tier 1 thanks to the raised limit.
        assert_abs_diff_eq!(
            compute_bill_amount("commercial", CubicMetres(30.0), Some(&book)).unwrap().0,
            115.0,
        );
        // Residential is not configured and falls back to its built-in schedule.
        assert_abs_diff_eq!(
            compute_bill_amount("residential", CubicMetres(30.0), Some(&book)).unwrap().0,
            70.0,
        );
    }

    #[test]
    fn test_unknown_classification_rejected_by_default() {
        assert_eq!(
            compute_bill_amount("industrial", CubicMetres(10.0), None),
            Err(BillingError::UnknownClassification("industrial".to_owned())),
        );
    }

    #[test]
    fn test_unknown_classification_billed_as_residential() {
        let residential = TariffSchedule { min_rate: Pesos(35.0), ..TariffSchedule::RESIDENTIAL };
        let book = TariffBook::default()
            .with(Classification::Residential, residential)
            .with_unknown_classification(UnknownClassification::Residential);
        let (classification, schedule) = resolve_schedule("industrial", Some(&book)).unwrap();
        assert_eq!(classification, Classification::Residential);
        assert_eq!(schedule, residential);
    }

    #[test]
    fn test_invalid_book_entry() {
        let book = TariffBook::default().with(
            Classification::Residential,
            TariffSchedule { tier1_limit: CubicMetres(5.0), ..TariffSchedule::RESIDENTIAL },
        );
        assert!(matches!(
            compute_bill_amount("residential", CubicMetres(1.0), Some(&book)),
            Err(BillingError::InvalidSchedule { .. }),
        ));
    }

    #[test]
    fn test_inverse_with_book() {
        let book = TariffBook::default().with(
            Classification::Residential,
            TariffSchedule { tier2_rate: PesosPerCubicMetre::ZERO, ..TariffSchedule::RESIDENTIAL },
        );
        assert_abs_diff_eq!(
            compute_consumption_from_amount("Residential", Pesos(42.5), Some(&book)).unwrap().0,
            20.0,
        );
        assert_eq!(
            compute_consumption_from_amount("residential", Pesos(100.0), Some(&book)),
            Err(BillingError::ZeroRateTier { tier: Tier::Second }),
        );
    }

    #[test]
    fn test_built_in_matches_fallbacks() {
        let book = TariffBook::built_in();
        for classification in Classification::ALL {
            assert_eq!(book.schedule_for(classification), TariffBook::default().schedule_for(classification));
        }
    }

    #[test]
    fn test_deserialize() {
        let book: TariffBook = toml::from_str(
            r#"
            unknown-classification = "residential"

            [commercial]
            min-consumption = 15
            min-rate = 40
            tier1-limit = 50
            tier1-rate = 5
            tier2-rate = 6
            "#,
        )
        .unwrap();
        assert_eq!(book.unknown_classification, UnknownClassification::Residential);
        assert_eq!(book.residential, None);
        assert_eq!(book.schedule_for(Classification::Commercial).tier1_limit, CubicMetres(50.0));
    }

    #[test]
    fn test_deserialize_camel_case_aliases() {
        let book: TariffBook = toml::from_str(
            r"
            [residential]
            minConsumption = 15.0
            minRate = 30.0
            tier1Limit = 25.0
            tier1Rate = 2.5
            tier2Rate = 3.0
            ",
        )
        .unwrap();
        assert_eq!(book.residential, Some(TariffSchedule::RESIDENTIAL));
    }
}
