mod book;
mod classification;
mod error;
mod invoice;
mod penalty;
mod reading;
mod settlement;
mod tariff;

pub use self::{
    book::{TariffBook, compute_bill_amount, compute_consumption_from_amount, resolve_schedule},
    classification::{Classification, UnknownClassification},
    error::{BillingError, Result},
    invoice::Invoice,
    penalty::{Assessment, PenaltyPolicy, compute_penalty, months_overdue, today},
    reading::MeterReading,
    settlement::{Settlement, SettlementLine, settle},
    tariff::{Segment, TariffSchedule, Tier},
};
