#![allow(clippy::doc_markdown)]

//! Tiered water tariff and late-payment penalty calculator.
//!
//! Everything in [`core`] is a pure function of its inputs: the tariff book and the penalty policy
//! are plain configuration supplied by the caller and are never mutated.

pub mod core;
pub mod fmt;
pub mod prelude;
pub mod quantity;
pub mod settings;
