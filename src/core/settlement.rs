use chrono::NaiveDate;

use crate::{
    core::{
        error::{BillingError, Result},
        invoice::Invoice,
        penalty::{Assessment, PenaltyPolicy},
    },
    prelude::{info, instrument},
    quantity::cost::Pesos,
};

/// Several invoices paid together, each with its own penalty.
#[derive(Clone, Debug, PartialEq)]
pub struct Settlement {
    pub payment_date: NaiveDate,
    pub lines: Vec<SettlementLine>,

    /// Sum of the invoice amounts.
    pub principal: Pesos,

    /// Sum of the penalties, each rounded to centavos.
    pub penalties: Pesos,

    pub total: Pesos,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SettlementLine {
    pub invoice_id: String,
    pub due_date: NaiveDate,
    pub principal: Pesos,
    pub penalty: Assessment,
}

impl SettlementLine {
    pub fn total(&self) -> Pesos {
        self.principal + self.penalty.amount
    }
}

/// Settle the invoices on the payment date.
///
/// Every invoice is assessed separately against the same payment date, regardless of any payment
/// date it may already carry.
#[instrument(skip_all, fields(n_invoices = invoices.len(), %payment_date))]
pub fn settle(
    invoices: &[Invoice],
    policy: &PenaltyPolicy,
    payment_date: NaiveDate,
) -> Result<Settlement> {
    if invoices.is_empty() {
        return Err(BillingError::OutOfDomain { what: "number of invoices", value: 0.0 });
    }
    let lines = invoices
        .iter()
        .map(|invoice| {
            let mut penalty = policy.assess(invoice.amount, invoice.due_date, payment_date)?;
            penalty.amount = penalty.amount.round_to_centavos();
            Ok(SettlementLine {
                invoice_id: invoice.id.clone(),
                due_date: invoice.due_date,
                principal: invoice.amount,
                penalty,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    let principal: Pesos = lines.iter().map(|line| line.principal).sum();
    let penalties: Pesos = lines.iter().map(|line| line.penalty.amount).sum();
    let total = principal + penalties;
    info!(%principal, %penalties, %total, "settled");
    Ok(Settlement { payment_date, lines, principal, penalties, total })
}
