//! Exact base-10 numbers for rates and balances.
//!
//! [`Decimal`] wraps an arbitrary-precision [`BigDecimal`] kept normalized
//! (no trailing zeros), so structural equality is numeric equality. JSON
//! numbers are read through their shortest decimal rendering and never
//! participate in binary floating point arithmetic.

use std::fmt;
use std::ops::Mul;
use std::str::FromStr;

use alloy_primitives::U256;
use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::{BigInt, Sign};
use serde::de::{self, Visitor};
use thiserror::Error;

/// Decimal places between wei and ether.
pub const ETHER_DECIMALS: i64 = 18;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecimalError {
    #[error("invalid decimal literal: {0:?}")]
    Parse(String),

    #[error("quantity {0:?} does not fit in 256 bits")]
    Overflow(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decimal(BigDecimal);

impl Decimal {
    pub fn zero() -> Self {
        Self(BigDecimal::from(0))
    }

    /// `digits * 10^-scale`.
    pub fn new(digits: impl Into<BigInt>, scale: i64) -> Self {
        Self::from_big(BigDecimal::new(digits.into(), scale))
    }

    fn from_big(value: BigDecimal) -> Self {
        Self(value.normalized())
    }

    pub fn is_zero(&self) -> bool {
        self.0.sign() == Sign::NoSign
    }

    pub fn is_negative(&self) -> bool {
        self.0.sign() == Sign::Minus
    }

    /// Rounds to `dp` fractional digits, half away from zero.
    #[must_use]
    pub fn round_dp(&self, dp: u32) -> Self {
        Self::from_big(self.0.with_scale_round(i64::from(dp), RoundingMode::HalfUp))
    }

    /// Integer part, truncated toward zero.
    pub fn trunc(&self) -> BigInt {
        let (digits, _) = self
            .0
            .with_scale_round(0, RoundingMode::Down)
            .as_bigint_and_exponent();
        digits
    }

    /// Parses a `0x`-prefixed (or bare) hexadecimal quantity of at most 256 bits.
    pub fn from_hex_str(input: &str) -> Result<Self, DecimalError> {
        Ok(Self::new(hex_quantity(input)?, 0))
    }

    /// Converts a hex wei quantity (as carried in account balances) to ether.
    pub fn from_wei_hex(input: &str) -> Result<Self, DecimalError> {
        Ok(Self::new(hex_quantity(input)?, ETHER_DECIMALS))
    }
}

fn hex_quantity(input: &str) -> Result<BigInt, DecimalError> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(DecimalError::Parse(input.to_string()));
    }
    let value = U256::from_str_radix(digits, 16)
        .map_err(|_| DecimalError::Overflow(input.to_string()))?;
    Ok(BigInt::from_bytes_be(Sign::Plus, &value.to_be_bytes_vec()))
}

impl Default for Decimal {
    fn default() -> Self {
        Self::zero()
    }
}

impl Mul for &Decimal {
    type Output = Decimal;

    fn mul(self, rhs: Self) -> Decimal {
        Decimal::from_big(&self.0 * &rhs.0)
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Self::new(value, 0)
    }
}

impl From<u64> for Decimal {
    fn from(value: u64) -> Self {
        Self::new(value, 0)
    }
}

impl FromStr for Decimal {
    type Err = DecimalError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let literal = input.trim();
        if literal.starts_with("0x") || literal.starts_with("0X") {
            return Self::from_hex_str(literal);
        }
        if literal.is_empty() {
            return Err(DecimalError::Parse(input.to_string()));
        }
        BigDecimal::from_str(literal)
            .map(Self::from_big)
            .map_err(|_| DecimalError::Parse(input.to_string()))
    }
}

/// Plain positional notation, never exponent form.
impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (digits, scale) = self.0.as_bigint_and_exponent();
        if digits.sign() == Sign::Minus {
            f.write_str("-")?;
        }
        let digits = digits.magnitude().to_string();
        if scale <= 0 {
            let zeros = usize::try_from(scale.unsigned_abs()).map_err(|_| fmt::Error)?;
            return write!(f, "{digits}{}", "0".repeat(zeros));
        }
        let scale = usize::try_from(scale).map_err(|_| fmt::Error)?;
        if digits.len() <= scale {
            write!(f, "0.{}{digits}", "0".repeat(scale - digits.len()))
        } else {
            let (int_part, frac_part) = digits.split_at(digits.len() - scale);
            write!(f, "{int_part}.{frac_part}")
        }
    }
}

impl serde::Serialize for Decimal {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct DecimalVisitor;

impl Visitor<'_> for DecimalVisitor {
    type Value = Decimal;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or a decimal string")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Decimal, E> {
        Ok(Decimal::from(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Decimal, E> {
        Ok(Decimal::from(value))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Decimal, E> {
        if !value.is_finite() {
            return Err(E::custom(format!("non-finite rate {value}")));
        }
        // Display yields the shortest round-tripping decimal, never exponent form.
        value.to_string().parse().map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Decimal, E> {
        value.parse().map_err(E::custom)
    }
}

impl<'de> serde::Deserialize<'de> for Decimal {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DecimalVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn parses_plain_and_exponent_forms() {
        assert_eq!(dec("12.500"), Decimal::new(125, 1));
        assert_eq!(dec("-0.05"), Decimal::new(-5, 2));
        assert_eq!(dec("1.5e3"), Decimal::from(1500i64));
        assert_eq!(dec("25e-4"), Decimal::new(25, 4));
        assert_eq!(dec("0x1f"), Decimal::from(31i64));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!("".parse::<Decimal>(), Err(DecimalError::Parse(_))));
        assert!(matches!("1.2.3".parse::<Decimal>(), Err(DecimalError::Parse(_))));
        assert!(matches!("abc".parse::<Decimal>(), Err(DecimalError::Parse(_))));
        assert!(matches!("0xzz".parse::<Decimal>(), Err(DecimalError::Parse(_))));
    }

    #[test]
    fn displays_without_trailing_zeros() {
        assert_eq!(dec("100.00").to_string(), "100");
        assert_eq!(dec("0.000123").to_string(), "0.000123");
        assert_eq!(dec("-3.140").to_string(), "-3.14");
        assert_eq!(Decimal::zero().to_string(), "0");
    }

    #[test]
    fn tiny_values_keep_every_digit() {
        let tiny = dec("0.00000000000000000000000000000001");
        assert!(!tiny.is_zero());
        assert_eq!(tiny.to_string(), "0.00000000000000000000000000000001");

        let wei = dec("0.000000000000000001");
        assert_eq!(
            (&wei * &wei).to_string(),
            "0.000000000000000000000000000000000001"
        );
    }

    #[test]
    fn multiplication_is_exact() {
        // 0.1 * 0.2 drifts in binary floating point.
        assert_eq!(&dec("0.1") * &dec("0.2"), dec("0.02"));
        assert_eq!((&dec("612.45") * &dec("0.00318")).to_string(), "1.947591");

        let wide = dec("1234567890123456789.0123456789");
        assert_eq!(
            (&wide * &wide).to_string(),
            "1524157875323883675049535156253619878.75019051998750190521"
        );
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(dec("2.345").round_dp(2), dec("2.35"));
        assert_eq!(dec("-2.345").round_dp(2), dec("-2.35"));
        assert_eq!(dec("2.344").round_dp(2), dec("2.34"));
        assert_eq!(dec("100").round_dp(2), dec("100"));
    }

    #[test]
    fn truncates_toward_zero() {
        assert_eq!(dec("255.9").trunc(), BigInt::from(255));
        assert_eq!(dec("-1.5").trunc(), BigInt::from(-1));
    }

    #[test]
    fn wei_hex_converts_to_ether() {
        assert_eq!(
            Decimal::from_wei_hex("0xde0b6b3a7640000").unwrap(),
            Decimal::from(1i64)
        );
        assert!(Decimal::from_wei_hex("0x0").unwrap().is_zero());
        let wide = "0xffffffffffffffffffffffffffffffffffffffff";
        assert_eq!(
            Decimal::from_wei_hex(wide).unwrap().to_string(),
            "1461501637330902918203684832716.283019655932542975"
        );
    }

    #[test]
    fn quantities_wider_than_256_bits_are_rejected() {
        let too_wide = format!("0x1{}", "0".repeat(64));
        assert!(matches!(
            Decimal::from_wei_hex(&too_wide),
            Err(DecimalError::Overflow(_))
        ));
    }

    #[test]
    fn deserializes_numbers_and_strings() {
        let values: Vec<Decimal> = serde_json::from_str(r#"[0.1, 3, "4.25", -7]"#).unwrap();
        assert_eq!(
            values,
            vec![dec("0.1"), dec("3"), dec("4.25"), Decimal::from(-7i64)]
        );
        let json = serde_json::to_string(&dec("4.25")).unwrap();
        assert_eq!(json, "\"4.25\"");
    }
}
