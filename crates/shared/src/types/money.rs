//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.
//! Rounding happens only when an amount is formatted for display.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a monetary amount with currency.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount, kept at full precision.
    pub amount: Decimal,
    /// ISO 4217 currency code (e.g., "IDR", "USD").
    pub currency: Currency,
}

/// ISO 4217 currency codes supported by the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Indonesian Rupiah
    Idr,
    /// US Dollar
    Usd,
    /// Euro
    Eur,
    /// Singapore Dollar
    Sgd,
    /// Japanese Yen
    Jpy,
}

impl Currency {
    /// Returns the symbol printed in front of formatted amounts.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Idr => "Rp",
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Sgd => "S$",
            Self::Jpy => "¥",
        }
    }
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }
}

/// Formats as `<symbol> <amount>`, e.g. `Rp 50,000`.
impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.currency.symbol(), format_amount(self.amount))
    }
}

/// Formats an amount with `,` thousands separators and zero decimal places.
///
/// Midpoints round to the nearest even unit, so `2.5` becomes `2`.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp(0);
    let digits = rounded.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idr => write!(f, "IDR"),
            Self::Usd => write!(f, "USD"),
            Self::Eur => write!(f, "EUR"),
            Self::Sgd => write!(f, "SGD"),
            Self::Jpy => write!(f, "JPY"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(0), "0")]
    #[case(dec!(999), "999")]
    #[case(dec!(1000), "1,000")]
    #[case(dec!(50000), "50,000")]
    #[case(dec!(1234567.89), "1,234,568")]
    #[case(dec!(-10000), "-10,000")]
    #[case(dec!(2.5), "2")]
    #[case(dec!(3.5), "4")]
    #[case(dec!(-0.4), "0")]
    #[case(dec!(100000.00), "100,000")]
    fn test_format_amount(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(format_amount(amount), expected);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(dec!(50000), Currency::Idr).to_string(), "Rp 50,000");
        assert_eq!(Money::new(dec!(-10000), Currency::Idr).to_string(), "Rp -10,000");
        assert_eq!(Money::new(dec!(1500.4), Currency::Usd).to_string(), "$ 1,500");
    }

    #[test]
    fn test_currency_display_and_symbol() {
        assert_eq!(Currency::Idr.to_string(), "IDR");
        assert_eq!(Currency::Idr.symbol(), "Rp");
        assert_eq!(Currency::Jpy.symbol(), "¥");
    }
}
