use clap::Parser;
use tubig::{
    core::{MeterReading, TariffBook, UnknownClassification, compute_bill_amount, compute_consumption_from_amount},
    fmt::format_currency,
    prelude::*,
    quantity::{cost::Pesos, volume::CubicMetres},
};

#[derive(Parser)]
pub struct ClassificationArgs {
    /// Client classification: `residential` or `commercial`, case-insensitive.
    #[clap(long, env = "CLASSIFICATION")]
    pub classification: String,

    /// Overrides the settings on how to bill an unrecognized classification.
    #[clap(long, env = "UNKNOWN_CLASSIFICATION")]
    pub unknown_classification: Option<UnknownClassification>,
}

impl ClassificationArgs {
    fn book(&self, book: &TariffBook) -> TariffBook {
        self.unknown_classification
            .map_or(*book, |policy| book.with_unknown_classification(policy))
    }
}

#[derive(Parser)]
pub struct BillArgs {
    #[clap(flatten)]
    pub classification: ClassificationArgs,

    /// Billed consumption in cubic metres.
    #[clap(
        long = "consumption",
        required_unless_present = "current_reading",
        conflicts_with_all = ["previous_reading", "current_reading"]
    )]
    pub consumption: Option<CubicMetres>,

    /// Previous meter register value in cubic metres.
    #[clap(long = "previous-reading", requires = "current_reading")]
    pub previous_reading: Option<CubicMetres>,

    /// Current meter register value in cubic metres.
    #[clap(long = "current-reading", requires = "previous_reading")]
    pub current_reading: Option<CubicMetres>,
}

impl BillArgs {
    fn consumption(&self) -> Result<CubicMetres> {
        match (self.consumption, self.previous_reading, self.current_reading) {
            (Some(consumption), _, _) => Ok(consumption),
            (None, Some(previous), Some(current)) => {
                Ok(MeterReading::new(previous, current).consumption()?)
            }
            _ => bail!("either the consumption or both meter readings are required"),
        }
    }

    pub fn run(&self, book: &TariffBook) -> Result {
        let consumption = self.consumption()?;
        let amount = compute_bill_amount(
            &self.classification.classification,
            consumption,
            Some(&self.classification.book(book)),
        )
        .context("failed to compute the bill amount")?;
        info!(%consumption, %amount, "computed");
        println!("{}", format_currency(amount));
        Ok(())
    }
}

#[derive(Parser)]
pub struct ConsumptionArgs {
    #[clap(flatten)]
    pub classification: ClassificationArgs,

    /// Bill amount in pesos.
    #[clap(long = "amount")]
    pub amount: Pesos,
}

impl ConsumptionArgs {
    pub fn run(&self, book: &TariffBook) -> Result {
        let consumption = compute_consumption_from_amount(
            &self.classification.classification,
            self.amount,
            Some(&self.classification.book(book)),
        )
        .context("failed to infer the consumption")?;
        info!(amount = %self.amount, %consumption, "inferred");
        println!("{consumption}");
        Ok(())
    }
}
