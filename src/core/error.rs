use thiserror::Error;

use crate::core::{classification::Classification, tariff::Tier};

#[derive(Debug, Error, PartialEq)]
pub enum BillingError {
    #[error("unknown client classification `{0}`")]
    UnknownClassification(String),

    #[error("invalid {classification} tariff schedule: {reason}")]
    InvalidSchedule { classification: Classification, reason: &'static str },

    #[error("invalid penalty policy: {reason}")]
    InvalidPolicy { reason: &'static str },

    #[error("{tier} has a zero rate, cannot convert the amount into consumption")]
    ZeroRateTier { tier: Tier },

    #[error("{what} is out of domain: {value}")]
    OutOfDomain { what: &'static str, value: f64 },
}

pub type Result<T = (), E = BillingError> = std::result::Result<T, E>;

/// Reject negative, infinite and `NaN` inputs.
pub(crate) fn ensure_in_domain(what: &'static str, value: f64) -> Result {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(BillingError::OutOfDomain { what, value })
    }
}
