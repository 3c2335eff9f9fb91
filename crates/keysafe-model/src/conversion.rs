//! Currency conversion helpers over [`Decimal`].

use crate::decimal::Decimal;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionOptions {
    /// Round the result to this many fractional digits.
    pub number_of_decimals: Option<u32>,
}

impl ConversionOptions {
    /// Exact decimal output, no rounding.
    #[must_use]
    pub fn decimal() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.number_of_decimals = Some(decimals);
        self
    }
}

/// Multiplies two amounts, applying the rounding requested in `options`.
pub fn multiply(left: &Decimal, right: &Decimal, options: &ConversionOptions) -> Decimal {
    let product = left * right;
    match options.number_of_decimals {
        Some(decimals) => product.round_dp(decimals),
        None => product,
    }
}

/// [`multiply`] rendered as a plain decimal string.
pub fn multiply_currencies(left: &Decimal, right: &Decimal, options: &ConversionOptions) -> String {
    multiply(left, right, options).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn multiplies_in_decimal() {
        let rendered =
            multiply_currencies(&dec("300.5"), &dec("0.0025"), &ConversionOptions::decimal());
        assert_eq!(rendered, "0.75125");
    }

    #[test]
    fn rounds_when_requested() {
        let options = ConversionOptions::decimal().with_decimals(2);
        assert_eq!(multiply(&dec("300.5"), &dec("0.0025"), &options), dec("0.75"));
        assert_eq!(
            multiply_currencies(&dec("612.45"), &dec("1.5"), &options),
            "918.68"
        );
    }
}
