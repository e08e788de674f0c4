use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    core::{
        error::Result,
        penalty::{Assessment, PenaltyPolicy},
    },
    quantity::cost::Pesos,
};

/// A bill issued to a client, as supplied by the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, bon::Builder)]
#[serde(rename_all = "kebab-case")]
pub struct Invoice {
    #[builder(into)]
    pub id: String,

    pub amount: Pesos,

    pub due_date: NaiveDate,

    /// Unset while the invoice is unpaid.
    pub payment_date: Option<NaiveDate>,
}

impl Invoice {
    /// Whether the invoice was paid late, or is still unpaid past its due date.
    #[must_use]
    pub fn is_overdue(&self, on: NaiveDate) -> bool {
        self.payment_date.unwrap_or(on) > self.due_date
    }

    /// Penalty owed when the invoice gets paid on the date.
    ///
    /// An invoice that already carries its payment date is assessed on that date instead.
    pub fn assess(&self, policy: &PenaltyPolicy, on: NaiveDate) -> Result<Assessment> {
        policy.assess(self.amount, self.due_date, self.payment_date.unwrap_or(on))
    }
}
