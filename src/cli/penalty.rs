use std::str::FromStr;

use chrono::NaiveDate;
use clap::Parser;
use tubig::{
    core::{Invoice, PenaltyPolicy, settle, today},
    fmt::{FormattedPercentage, format_currency},
    prelude::*,
    quantity::cost::Pesos,
};

use crate::tables::build_settlement_table;

#[derive(Parser)]
pub struct PolicyArgs {
    /// Overrides the penalty fraction per month from the settings.
    #[clap(long = "rate-per-month", env = "PENALTY_RATE_PER_MONTH")]
    pub rate_per_month: Option<f64>,

    /// Overrides the maximum penalty fraction from the settings.
    #[clap(long = "max-rate", env = "PENALTY_MAX_RATE")]
    pub max_rate: Option<f64>,

    /// Overrides the maximum number of penalty months from the settings.
    #[clap(long = "max-months", env = "PENALTY_MAX_MONTHS")]
    pub max_months: Option<u32>,
}

impl PolicyArgs {
    fn policy(&self, settings: &PenaltyPolicy) -> PenaltyPolicy {
        PenaltyPolicy::builder()
            .rate_per_month(self.rate_per_month.unwrap_or(settings.rate_per_month))
            .max_rate(self.max_rate.unwrap_or(settings.max_rate))
            .max_months(self.max_months.unwrap_or(settings.max_months))
            .build()
    }
}

#[derive(Parser)]
pub struct PenaltyArgs {
    #[clap(flatten)]
    pub policy: PolicyArgs,

    /// Bill amount in pesos.
    #[clap(long = "amount")]
    pub amount: Pesos,

    /// Due date, `YYYY-MM-DD`.
    #[clap(long = "due-date")]
    pub due_date: NaiveDate,

    /// Payment date, `YYYY-MM-DD`, defaults to today.
    #[clap(long = "payment-date")]
    pub payment_date: Option<NaiveDate>,
}

impl PenaltyArgs {
    pub fn run(&self, settings: &PenaltyPolicy) -> Result {
        let payment_date = self.payment_date.unwrap_or_else(today);
        let assessment = self
            .policy
            .policy(settings)
            .assess(self.amount, self.due_date, payment_date)
            .context("failed to assess the penalty")?;
        info!(
            %payment_date,
            months = assessment.months,
            rate = ?FormattedPercentage(assessment.rate),
            "assessed",
        );
        println!("{}", format_currency(assessment.amount));
        Ok(())
    }
}

/// Invoice given on the command line as `ID:AMOUNT:DUE-DATE`.
#[derive(Clone)]
pub struct InvoiceArg(pub Invoice);

impl FromStr for InvoiceArg {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let mut parts = value.splitn(3, ':');
        let (Some(id), Some(amount), Some(due_date)) = (parts.next(), parts.next(), parts.next())
        else {
            bail!("expected `ID:AMOUNT:DUE-DATE`, got `{value}`");
        };
        ensure!(!id.is_empty(), "invoice ID must not be empty");
        Ok(Self(
            Invoice::builder()
                .id(id)
                .amount(amount.parse().with_context(|| format!("invalid amount `{amount}`"))?)
                .due_date(due_date.parse().with_context(|| format!("invalid due date `{due_date}`"))?)
                .build(),
        ))
    }
}

#[derive(Parser)]
pub struct SettleArgs {
    #[clap(flatten)]
    pub policy: PolicyArgs,

    /// Invoice to pay as `ID:AMOUNT:DUE-DATE`, repeat for every invoice.
    #[clap(long = "invoice", required = true)]
    pub invoices: Vec<InvoiceArg>,

    /// Payment date, `YYYY-MM-DD`, defaults to today.
    #[clap(long = "payment-date")]
    pub payment_date: Option<NaiveDate>,
}

impl SettleArgs {
    pub fn run(&self, settings: &PenaltyPolicy) -> Result {
        let invoices: Vec<Invoice> = self.invoices.iter().map(|invoice| invoice.0.clone()).collect();
        let payment_date = self.payment_date.unwrap_or_else(today);
        let settlement = settle(&invoices, &self.policy.policy(settings), payment_date)
            .context("failed to settle the invoices")?;
        println!("{}", build_settlement_table(&settlement));
        Ok(())
    }
}
