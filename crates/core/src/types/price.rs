//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
///
/// Amounts are held as [`Decimal`] in the currency's standard unit
/// (e.g., euros, not cents) so that line totals never accumulate
/// floating-point error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit.
    amount: Decimal,
    /// ISO 4217 currency code.
    currency: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency: CurrencyCode) -> Self {
        Self { amount, currency }
    }

    /// Create a price from the smallest currency unit (e.g., cents).
    #[must_use]
    pub fn from_cents(cents: i64, currency: CurrencyCode) -> Self {
        Self {
            amount: Decimal::new(cents, 2),
            currency,
        }
    }

    /// A zero price in the given currency.
    #[must_use]
    pub const fn zero(currency: CurrencyCode) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// The decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// The currency code.
    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }

    /// The price multiplied by a quantity (a cart line total).
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self {
            amount: self.amount * Decimal::from(quantity),
            currency: self.currency,
        }
    }

    /// Format for display (e.g., "€250.00").
    #[must_use]
    pub fn display(&self) -> String {
        format!("{}{:.2}", self.currency.symbol(), self.amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    EUR,
    USD,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// The display symbol for the currency.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// The ISO 4217 code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EUR => "EUR",
            Self::USD => "USD",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_euro() {
        let price = Price::new(Decimal::from(250), CurrencyCode::EUR);
        assert_eq!(price.display(), "€250.00");
    }

    #[test]
    fn test_display_dollar_cents() {
        let price = Price::from_cents(1999, CurrencyCode::USD);
        assert_eq!(price.display(), "$19.99");
    }

    #[test]
    fn test_times() {
        let price = Price::from_cents(1050, CurrencyCode::EUR);
        let line = price.times(3);
        assert_eq!(line.amount(), Decimal::new(3150, 2));
        assert_eq!(line.display(), "€31.50");
    }

    #[test]
    fn test_zero() {
        let zero = Price::zero(CurrencyCode::EUR);
        assert_eq!(zero.display(), "€0.00");
    }

    #[test]
    fn test_serde_roundtrip() {
        let price = Price::from_cents(25000, CurrencyCode::EUR);
        let json = serde_json::to_string(&price).unwrap();
        let parsed: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, price);
    }

    #[test]
    fn test_currency_code_display() {
        assert_eq!(CurrencyCode::EUR.to_string(), "EUR");
        assert_eq!(CurrencyCode::GBP.symbol(), "£");
    }
}
