mod penalty;
mod receipt;
mod settings;
mod tariff;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use self::{
    penalty::{PenaltyArgs, SettleArgs},
    receipt::WordsArgs,
    settings::DefaultsArgs,
    tariff::{BillArgs, ConsumptionArgs},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    /// Billing rules file, built-in rules are used when it does not exist.
    #[clap(long = "settings", env = "TUBIG_SETTINGS", default_value = "tubig.toml")]
    pub settings: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute the bill amount for the consumption.
    #[clap(name = "bill")]
    Bill(BillArgs),

    /// Infer the consumption from a bill amount.
    #[clap(name = "consumption")]
    Consumption(ConsumptionArgs),

    /// Compute the late-payment penalty of a single bill.
    #[clap(name = "penalty")]
    Penalty(PenaltyArgs),

    /// Pay several bills at once, each with its own penalty.
    #[clap(name = "settle")]
    Settle(SettleArgs),

    /// Spell the amount out for a receipt.
    #[clap(name = "words")]
    Words(WordsArgs),

    /// Show the billing rules in effect.
    #[clap(name = "tariffs")]
    Tariffs,

    /// Write the built-in billing rules into the settings file.
    #[clap(name = "defaults")]
    Defaults(DefaultsArgs),
}
