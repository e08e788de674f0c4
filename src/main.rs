#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod cli;
mod tables;

use clap::{Parser, crate_version};
use tubig::{prelude::*, settings::Settings};

use crate::{
    cli::{Args, Command},
    tables::{build_penalty_table, build_tariff_table},
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    debug!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let settings = Settings::read_from(&args.settings)?;

    match args.command {
        Command::Bill(args) => args.run(&settings.tariffs),
        Command::Consumption(args) => args.run(&settings.tariffs),
        Command::Penalty(args) => args.run(&settings.penalty),
        Command::Settle(args) => args.run(&settings.penalty),
        Command::Words(args) => args.run(),
        Command::Tariffs => {
            println!("{}", build_tariff_table(&settings.tariffs));
            println!("{}", build_penalty_table(&settings.penalty));
            Ok(())
        }
        Command::Defaults(defaults) => defaults.run(&args.settings),
    }
}
