//! Precision-safe decimal types for token reference data.
//!
//! Uses `rust_decimal` for exact decimal arithmetic so listed prices
//! and volumes round-trip through JSON without float noise.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit price in USD.
///
/// Wraps `Decimal` to keep prices and volumes from being mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(pub Decimal);

impl Price {
    pub const ZERO: Self = Self(Decimal::ZERO);

    #[inline]
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    #[inline]
    pub fn inner(&self) -> Decimal {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Build from a float, rounded to `dp` decimal places.
    ///
    /// Non-finite input collapses to zero.
    pub fn from_f64_rounded(value: f64, dp: u32) -> Self {
        Self(
            Decimal::from_f64(value)
                .map(|d| d.round_dp(dp))
                .unwrap_or(Decimal::ZERO),
        )
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Price {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<Decimal> for Price {
    fn from(d: Decimal) -> Self {
        Self(d)
    }
}

/// Traded volume or market capitalisation in USD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Volume(pub Decimal);

impl Volume {
    pub const ZERO: Self = Self(Decimal::ZERO);

    #[inline]
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    #[inline]
    pub fn inner(&self) -> Decimal {
        self.0
    }

    /// Build from a float, rounded to `dp` decimal places.
    pub fn from_f64_rounded(value: f64, dp: u32) -> Self {
        Self(
            Decimal::from_f64(value)
                .map(|d| d.round_dp(dp))
                .unwrap_or(Decimal::ZERO),
        )
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Volume {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<Decimal> for Volume {
    fn from(d: Decimal) -> Self {
        Self(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_f64_rounded() {
        let price = Price::from_f64_rounded(1.234_567, 4);
        assert_eq!(price.inner(), dec!(1.2346));

        let nan = Price::from_f64_rounded(f64::NAN, 4);
        assert!(nan.is_zero());
    }

    #[test]
    fn test_decimal_serializes_as_string() {
        let price: Price = "0.0234".parse().unwrap();
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "\"0.0234\"");
    }
}
