use std::fmt::{Debug, Display, Formatter};

use itertools::Itertools;

use crate::{
    core::{BillingError, Result},
    quantity::cost::Pesos,
};

pub struct FormattedPercentage(pub f64);

impl Debug for FormattedPercentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for FormattedPercentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}

/// Split the amount into whole pesos and centavos, rounding to the nearest centavo.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn split_centavos(amount: f64) -> (u64, u64) {
    let centavos = (amount.abs() * 100.0).round() as u64;
    (centavos / 100, centavos % 100)
}

/// Render the amount the way Philippine receipts do: `₱1,234.50`.
#[must_use]
pub fn format_currency(amount: Pesos) -> String {
    let (pesos, centavos) = split_centavos(amount.0);
    let sign = if amount.0 < 0.0 && (pesos, centavos) != (0, 0) { "-" } else { "" };
    let digits = pesos.to_string().chars().collect_vec();
    let grouped = digits.rchunks(3).rev().map(|group| group.iter().collect::<String>()).join(",");
    format!("{sign}₱{grouped}.{centavos:02}")
}

const ONES: [&str; 10] = ["", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine"];
const TEENS: [&str; 10] = [
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];
const TENS: [&str; 10] =
    ["", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety"];
const SCALES: [(u64, &str); 3] =
    [(1_000_000_000, "Billion"), (1_000_000, "Million"), (1_000, "Thousand")];

/// Upper bound of the spelled amounts, so that every centavo stays exactly representable.
const MAX_SPELLED_AMOUNT: f64 = 1e13;

/// Amount in words for the receipt, for example
/// `One Thousand Two Hundred Thirty Four Pesos and Fifty Six/100`.
pub fn number_to_words(amount: Pesos) -> Result<String> {
    if !amount.0.is_finite() || amount.0 < 0.0 || amount.0 >= MAX_SPELLED_AMOUNT {
        return Err(BillingError::OutOfDomain { what: "amount", value: amount.0 });
    }
    let (pesos, centavos) = split_centavos(amount.0);
    let mut words = if pesos == 0 { vec!["Zero"] } else { cardinal(pesos) };
    words.push("Pesos");
    if centavos == 0 {
        words.push("Only");
        Ok(words.join(" "))
    } else {
        Ok(format!("{} and {}/100", words.join(" "), cardinal(centavos).join(" ")))
    }
}

/// Cardinal words of a positive number, grouped by scale.
fn cardinal(number: u64) -> Vec<&'static str> {
    for (scale, name) in SCALES {
        if number >= scale {
            let mut words = cardinal(number / scale);
            words.push(name);
            words.extend(cardinal(number % scale));
            return words;
        }
    }
    below_thousand(number)
}

#[allow(clippy::cast_possible_truncation)]
fn below_thousand(number: u64) -> Vec<&'static str> {
    let mut words = Vec::new();
    let hundreds = (number / 100) as usize;
    if hundreds > 0 {
        words.extend([ONES[hundreds], "Hundred"]);
    }
    let rest = (number % 100) as usize;
    match rest {
        0 => {}
        1..=9 => words.push(ONES[rest]),
        10..=19 => words.push(TEENS[rest - 10]),
        _ => {
            words.push(TENS[rest / 10]);
            if rest % 10 > 0 {
                words.push(ONES[rest % 10]);
            }
        }
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(Pesos(0.0)), "₱0.00");
        assert_eq!(format_currency(Pesos(42.5)), "₱42.50");
        assert_eq!(format_currency(Pesos(999.999)), "₱1,000.00");
        assert_eq!(format_currency(Pesos(1_234_567.891)), "₱1,234,567.89");
        assert_eq!(format_currency(Pesos(-70.0)), "-₱70.00");
        assert_eq!(format_currency(Pesos(-0.001)), "₱0.00");
    }

    #[test]
    fn test_formatted_percentage() {
        assert_eq!(FormattedPercentage(0.36).to_string(), "36.0%");
    }

    #[test]
    fn test_zero() {
        assert_eq!(number_to_words(Pesos(0.0)).unwrap(), "Zero Pesos Only");
        assert_eq!(number_to_words(Pesos(0.001)).unwrap(), "Zero Pesos Only");
    }

    #[test]
    fn test_whole_pesos() {
        assert_eq!(number_to_words(Pesos(30.0)).unwrap(), "Thirty Pesos Only");
        assert_eq!(number_to_words(Pesos(115.0)).unwrap(), "One Hundred Fifteen Pesos Only");
        assert_eq!(number_to_words(Pesos(1000.0)).unwrap(), "One Thousand Pesos Only");
        assert_eq!(number_to_words(Pesos(2005.0)).unwrap(), "Two Thousand Five Pesos Only");
    }

    #[test]
    fn test_centavos() {
        assert_eq!(
            number_to_words(Pesos(1234.56)).unwrap(),
            "One Thousand Two Hundred Thirty Four Pesos and Fifty Six/100",
        );
        assert_eq!(number_to_words(Pesos(42.5)).unwrap(), "Forty Two Pesos and Fifty/100");
        assert_eq!(number_to_words(Pesos(0.75)).unwrap(), "Zero Pesos and Seventy Five/100");
    }

    #[test]
    fn test_centavo_carry() {
        assert_eq!(number_to_words(Pesos(19.999)).unwrap(), "Twenty Pesos Only");
    }

    #[test]
    fn test_large_amounts() {
        assert_eq!(
            number_to_words(Pesos(1_000_000.0)).unwrap(),
            "One Million Pesos Only",
        );
        assert_eq!(
            number_to_words(Pesos(2_512_019.0)).unwrap(),
            "Two Million Five Hundred Twelve Thousand Nineteen Pesos Only",
        );
        assert_eq!(
            number_to_words(Pesos(110_000.0)).unwrap(),
            "One Hundred Ten Thousand Pesos Only",
        );
    }

    #[test]
    fn test_amount_too_large_to_spell() {
        assert_eq!(
            number_to_words(Pesos(1e13)),
            Err(BillingError::OutOfDomain { what: "amount", value: 1e13 }),
        );
        assert!(number_to_words(Pesos(1e20)).is_err());
        assert_eq!(
            number_to_words(Pesos(9_999_999_999_999.0)).unwrap(),
            "Nine Thousand Nine Hundred Ninety Nine Billion Nine Hundred Ninety Nine Million \
             Nine Hundred Ninety Nine Thousand Nine Hundred Ninety Nine Pesos Only",
        );
    }

    #[test]
    fn test_negative_amount() {
        assert!(number_to_words(Pesos(-1.0)).is_err());
        assert!(number_to_words(Pesos(f64::NAN)).is_err());
    }
}
