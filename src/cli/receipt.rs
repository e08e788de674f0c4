use clap::Parser;
use tubig::{
    fmt::{format_currency, number_to_words},
    prelude::*,
    quantity::cost::Pesos,
};

#[derive(Parser)]
pub struct WordsArgs {
    /// Amount in pesos.
    #[clap(long = "amount")]
    pub amount: Pesos,
}

impl WordsArgs {
    pub fn run(&self) -> Result {
        let words = number_to_words(self.amount).context("failed to spell the amount")?;
        println!("{} ({words})", format_currency(self.amount));
        Ok(())
    }
}
