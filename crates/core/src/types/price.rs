//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are exact decimals in rupees. On the wire they stay bare JSON
//! numbers (`2999`, `49.5`) so stored carts keep the shape every page of the
//! shop reads.

use core::fmt;
use core::iter::Sum;
use core::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer, ser};

/// Symbol prefixed to every displayed amount.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Errors that can occur when reading a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input is not a decimal number.
    #[error("price must be a decimal number: {0}")]
    Invalid(String),
    /// The amount is below zero.
    #[error("price cannot be negative")]
    Negative,
}

/// A non-negative amount of money.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(Decimal);

impl Price {
    /// Zero rupees.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if the amount is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative);
        }
        Ok(Self(amount))
    }

    /// Create a price from a whole number of rupees.
    #[must_use]
    pub fn from_whole(amount: u32) -> Self {
        Self(Decimal::from(amount))
    }

    /// Parse a price from its decimal string form.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a decimal or is negative.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let amount = Decimal::from_str(s.trim()).map_err(|e| PriceError::Invalid(e.to_string()))?;
        Self::new(amount)
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// This price multiplied by a line quantity.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }

    /// Format for display (e.g., "₹2999", "₹49.5").
    #[must_use]
    pub fn display(&self) -> String {
        format!("{CURRENCY_SYMBOL}{}", self.0.normalize())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|price| price.0).sum())
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match (self.0.fract().is_zero(), self.0.to_i64(), self.0.to_f64()) {
            (true, Some(whole), _) => serializer.serialize_i64(whole),
            (_, _, Some(value)) => serializer.serialize_f64(value),
            _ => Err(ser::Error::custom("price out of range")),
        }
    }
}

struct PriceVisitor;

impl Visitor<'_> for PriceVisitor {
    type Value = Price;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative number")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Price, E> {
        Price::new(Decimal::from(v)).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Price, E> {
        Ok(Price(Decimal::from(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Price, E> {
        let amount = Decimal::try_from(v).map_err(E::custom)?;
        Price::new(amount).map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Price, E> {
        Price::parse(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PriceVisitor)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_price_serializes_as_integer() {
        let price = Price::from_whole(2999);
        assert_eq!(serde_json::to_string(&price).unwrap(), "2999");
    }

    #[test]
    fn test_fractional_price_serializes_as_float() {
        let price = Price::parse("49.5").unwrap();
        assert_eq!(serde_json::to_string(&price).unwrap(), "49.5");
    }

    #[test]
    fn test_deserialize_number_forms() {
        assert_eq!(
            serde_json::from_str::<Price>("100").unwrap(),
            Price::from_whole(100)
        );
        assert_eq!(
            serde_json::from_str::<Price>("100.0").unwrap(),
            Price::from_whole(100)
        );
        assert_eq!(
            serde_json::from_str::<Price>("\"100\"").unwrap(),
            Price::from_whole(100)
        );
    }

    #[test]
    fn test_negative_rejected() {
        assert!(serde_json::from_str::<Price>("-5").is_err());
        assert_eq!(Price::parse("-1"), Err(PriceError::Negative));
    }

    #[test]
    fn test_times_and_sum() {
        let total: Price = [Price::from_whole(100).times(2), Price::from_whole(50).times(1)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::from_whole(250));
    }

    #[test]
    fn test_display() {
        assert_eq!(Price::from_whole(250).display(), "₹250");
        assert_eq!(Price::parse("250.50").unwrap().display(), "₹250.5");
    }
}
