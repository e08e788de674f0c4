use serde::{Deserialize, Serialize};

use crate::{
    core::error::{BillingError, Result, ensure_in_domain},
    quantity::volume::CubicMetres,
};

/// Two consecutive water meter register values.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MeterReading {
    #[serde(alias = "prevReading")]
    pub previous: CubicMetres,

    #[serde(alias = "currReading")]
    pub current: CubicMetres,
}

impl MeterReading {
    pub const fn new(previous: CubicMetres, current: CubicMetres) -> Self {
        Self { previous, current }
    }

    /// Billed consumption between the readings.
    pub fn consumption(self) -> Result<CubicMetres> {
        ensure_in_domain("previous reading", self.previous.0)?;
        ensure_in_domain("current reading", self.current.0)?;
        let consumption = self.current - self.previous;
        if consumption < CubicMetres::ZERO {
            return Err(BillingError::OutOfDomain { what: "consumption", value: consumption.0 });
        }
        Ok(consumption)
    }
}
