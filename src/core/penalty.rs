use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{
    core::error::{BillingError, Result, ensure_in_domain},
    prelude::{debug, instrument},
    quantity::cost::Pesos,
};

/// Late-payment penalty rules.
///
/// The effective fraction is `min(min(months, max_months) × rate_per_month, max_rate)`.
/// Zero rates are valid and disable penalties. Missing settings fields fall back to
/// [`PenaltyPolicy::DEFAULT`].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, bon::Builder)]
#[serde(default, rename_all = "kebab-case")]
pub struct PenaltyPolicy {
    /// Fraction of the bill accrued per penalty month.
    #[serde(alias = "ratePerMonth")]
    pub rate_per_month: f64,

    /// Ceiling of the cumulative fraction.
    #[serde(alias = "maxRate")]
    pub max_rate: f64,

    /// Ceiling of the number of penalty months.
    #[serde(alias = "maxMonths")]
    pub max_months: u32,
}

impl Default for PenaltyPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl PenaltyPolicy {
    /// 2 % per month, capped at 36 % and 18 months.
    pub const DEFAULT: Self = Self { rate_per_month: 0.02, max_rate: 0.36, max_months: 18 };

    pub fn validate(&self) -> Result {
        for rate in [self.rate_per_month, self.max_rate] {
            if !rate.is_finite() {
                return Err(BillingError::InvalidPolicy { reason: "rates must be finite" });
            }
            if rate < 0.0 {
                return Err(BillingError::InvalidPolicy { reason: "rates must be non-negative" });
            }
        }
        Ok(())
    }

    /// Penalty fraction for the number of penalty months, with both caps applied.
    #[must_use]
    pub fn rate_for(&self, months: u32) -> f64 {
        (f64::from(months.min(self.max_months)) * self.rate_per_month).min(self.max_rate)
    }

    /// Assess the penalty of a bill paid on the payment date.
    pub fn assess(
        &self,
        bill_amount: Pesos,
        due_date: NaiveDate,
        payment_date: NaiveDate,
    ) -> Result<Assessment> {
        ensure_in_domain("bill amount", bill_amount.0)?;
        self.validate()?;
        let months = months_overdue(due_date, payment_date).min(self.max_months);
        let rate = self.rate_for(months);
        Ok(Assessment { months, rate, amount: bill_amount * rate })
    }

    pub fn penalty(
        &self,
        bill_amount: Pesos,
        due_date: NaiveDate,
        payment_date: NaiveDate,
    ) -> Result<Pesos> {
        Ok(self.assess(bill_amount, due_date, payment_date)?.amount)
    }
}

/// Outcome of a penalty assessment.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Assessment {
    /// Penalty months after the `max_months` cap.
    pub months: u32,

    /// Effective fraction of the bill.
    pub rate: f64,

    pub amount: Pesos,
}

/// Number of penalty months for a payment made on `payment_date`.
///
/// A month only counts as complete once the payment day-of-month reaches the due day-of-month.
/// A payment on or before the due date is never penalized. Any later payment is billed at least
/// one month.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn months_overdue(due_date: NaiveDate, payment_date: NaiveDate) -> u32 {
    if payment_date <= due_date {
        return 0;
    }
    let raw_months = 12 * (payment_date.year() - due_date.year()) + payment_date.month() as i32
        - due_date.month() as i32;
    let complete_months =
        if payment_date.day() < due_date.day() { (raw_months - 1).max(0) } else { raw_months };
    complete_months.max(1).unsigned_abs()
}

/// Local calendar date, the payment date of a bill paid now.
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Penalty for a bill, paid today unless the payment date is given.
#[instrument(level = "debug", skip(policy))]
pub fn compute_penalty(
    bill_amount: Pesos,
    due_date: NaiveDate,
    policy: Option<&PenaltyPolicy>,
    payment_date: Option<NaiveDate>,
) -> Result<Pesos> {
    let payment_date = payment_date.unwrap_or_else(today);
    let assessment = policy.copied().unwrap_or_default().assess(bill_amount, due_date, payment_date)?;
    debug!(%payment_date, assessment.months, %assessment.amount, "assessed");
    Ok(assessment.amount)
}
