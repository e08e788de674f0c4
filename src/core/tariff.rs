use serde::{Deserialize, Serialize};

use crate::{
    core::{
        classification::Classification,
        error::{BillingError, Result, ensure_in_domain},
    },
    quantity::{cost::Pesos, price::PesosPerCubicMetre, volume::CubicMetres},
};

/// Three-tier pricing rule for one client classification.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, bon::Builder)]
#[serde(rename_all = "kebab-case")]
pub struct TariffSchedule {
    /// Volume covered by the flat minimum charge.
    #[serde(alias = "minConsumption")]
    pub min_consumption: CubicMetres,

    /// Flat charge for consumption up to [`TariffSchedule::min_consumption`].
    #[serde(alias = "minRate")]
    pub min_rate: Pesos,

    /// Upper bound (inclusive) of the first marginal tier.
    #[serde(alias = "tier1Limit")]
    pub tier1_limit: CubicMetres,

    /// Rate between [`TariffSchedule::min_consumption`] and [`TariffSchedule::tier1_limit`].
    #[serde(alias = "tier1Rate")]
    pub tier1_rate: PesosPerCubicMetre,

    /// Rate above [`TariffSchedule::tier1_limit`].
    #[serde(alias = "tier2Rate")]
    pub tier2_rate: PesosPerCubicMetre,
}

impl TariffSchedule {
    pub const RESIDENTIAL: Self = Self {
        min_consumption: CubicMetres(15.0),
        min_rate: Pesos(30.0),
        tier1_limit: CubicMetres(25.0),
        tier1_rate: PesosPerCubicMetre(2.5),
        tier2_rate: PesosPerCubicMetre(3.0),
    };

    pub const COMMERCIAL: Self = Self {
        min_consumption: CubicMetres(15.0),
        min_rate: Pesos(40.0),
        tier1_limit: CubicMetres(25.0),
        tier1_rate: PesosPerCubicMetre(5.0),
        tier2_rate: PesosPerCubicMetre(6.0),
    };

    /// Built-in schedule of the classification.
    pub const fn default_for(classification: Classification) -> Self {
        match classification {
            Classification::Residential => Self::RESIDENTIAL,
            Classification::Commercial => Self::COMMERCIAL,
        }
    }

    pub fn validate(&self, classification: Classification) -> Result {
        let invalid = |reason| Err(BillingError::InvalidSchedule { classification, reason });
        let values = [
            self.min_consumption.0,
            self.min_rate.0,
            self.tier1_limit.0,
            self.tier1_rate.0,
            self.tier2_rate.0,
        ];
        if !values.iter().all(|value| value.is_finite()) {
            return invalid("all values must be finite");
        }
        if values.iter().any(|value| *value < 0.0) {
            return invalid("all values must be non-negative");
        }
        if self.tier1_limit < self.min_consumption {
            return invalid("tier 1 limit must not be below the minimum consumption");
        }
        Ok(())
    }

    /// Compile the schedule into its ordered consumption segments.
    ///
    /// Each segment starts where the previous one ends and carries the exact amount billed at its
    /// start, so the resulting function is continuous by construction.
    pub fn segments(&self) -> [Segment; 3] {
        let flat = Segment {
            tier: Tier::Flat,
            start: CubicMetres::ZERO,
            end: Some(self.min_consumption),
            rate: PesosPerCubicMetre::ZERO,
            base: self.min_rate,
        };
        let first = Segment {
            tier: Tier::First,
            start: self.min_consumption,
            end: Some(self.tier1_limit),
            rate: self.tier1_rate,
            base: self.min_rate,
        };
        let second = Segment {
            tier: Tier::Second,
            start: self.tier1_limit,
            end: None,
            rate: self.tier2_rate,
            base: first.ceiling().unwrap_or(self.min_rate),
        };
        [flat, first, second]
    }

    /// Bill amount for the consumption.
    pub fn bill_amount(&self, consumption: CubicMetres) -> Result<Pesos> {
        ensure_in_domain("consumption", consumption.0)?;
        let segments = self.segments();
        let segment = Segment::locate(&segments, |segment| segment.covers(consumption));
        Ok(segment.amount_at(consumption))
    }

    /// Inverse of [`TariffSchedule::bill_amount`].
    ///
    /// Any amount up to the minimum charge maps onto the minimum consumption: the forward function
    /// is flat there, so there is no unique preimage.
    pub fn consumption_for(&self, amount: Pesos) -> Result<CubicMetres> {
        ensure_in_domain("amount", amount.0)?;
        let segments = self.segments();
        let segment = Segment::locate(&segments, |segment| {
            segment.ceiling().is_none_or(|ceiling| amount <= ceiling)
        });
        match segment.tier {
            Tier::Flat => Ok(self.min_consumption),
            tier if segment.rate <= PesosPerCubicMetre::ZERO => {
                Err(BillingError::ZeroRateTier { tier })
            }
            _ => Ok(segment.start + (amount - segment.base) / segment.rate),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Display)]
pub enum Tier {
    #[display("flat tier")]
    Flat,

    #[display("tier 1")]
    First,

    #[display("tier 2")]
    Second,
}

/// Linear piece of a tariff schedule.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    pub tier: Tier,

    /// Exclusive, except for the flat segment which starts at zero.
    pub start: CubicMetres,

    /// Inclusive, `None` for the open-ended last segment.
    pub end: Option<CubicMetres>,

    pub rate: PesosPerCubicMetre,

    /// Amount billed at [`Segment::start`].
    pub base: Pesos,
}

impl Segment {
    pub fn amount_at(&self, consumption: CubicMetres) -> Pesos {
        self.base + self.rate * (consumption - self.start)
    }

    /// Amount billed at the end of the segment.
    pub fn ceiling(&self) -> Option<Pesos> {
        self.end.map(|end| self.amount_at(end))
    }

    pub fn covers(&self, consumption: CubicMetres) -> bool {
        self.end.is_none_or(|end| consumption <= end)
    }

    /// First segment matching the predicate, or the open-ended last one.
    fn locate(segments: &[Self; 3], predicate: impl Fn(&Self) -> bool) -> &Self {
        let [.., last] = segments;
        segments.iter().find(|segment| predicate(segment)).unwrap_or(last)
    }
}
