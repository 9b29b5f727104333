//! Currencies and major-to-minor unit conversion.
//!
//! Revolut expects amounts as integers in the currency's minor unit (cents for
//! EUR, yen for JPY, fils for KWD). The conversion truncates toward zero, so
//! `10.556 EUR` becomes `1055`, not `1056`.

use std::borrow::Cow;
use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::CoreError;

/// An ISO 4217 currency: its alphabetic code and minor-unit exponent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Currency {
    code: Cow<'static, str>,
    exponent: u32,
}

impl Currency {
    /// Euro.
    pub const EUR: Self = Self::from_static("EUR", 2);
    /// Pound sterling.
    pub const GBP: Self = Self::from_static("GBP", 2);
    /// US dollar.
    pub const USD: Self = Self::from_static("USD", 2);
    /// Swiss franc.
    pub const CHF: Self = Self::from_static("CHF", 2);
    /// Polish zloty.
    pub const PLN: Self = Self::from_static("PLN", 2);
    /// Japanese yen (no minor unit).
    pub const JPY: Self = Self::from_static("JPY", 0);
    /// Kuwaiti dinar (three decimal digits).
    pub const KWD: Self = Self::from_static("KWD", 3);

    /// Create a currency from its code and exponent.
    #[must_use]
    pub fn new(code: impl Into<String>, exponent: u32) -> Self {
        Self {
            code: Cow::Owned(code.into()),
            exponent,
        }
    }

    const fn from_static(code: &'static str, exponent: u32) -> Self {
        Self {
            code: Cow::Borrowed(code),
            exponent,
        }
    }

    /// The alphabetic ISO 4217 code, e.g. `"EUR"`.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Number of minor-unit decimal digits.
    #[must_use]
    pub const fn exponent(&self) -> u32 {
        self.exponent
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

/// Convert a major-unit amount into minor units of `currency`.
///
/// The result is `amount * 10^exponent` with any fractional remainder
/// truncated toward zero.
///
/// # Errors
///
/// Returns [`CoreError::AmountOverflow`] if the multiplier or the product does
/// not fit, or the result is outside the `i64` range.
pub fn to_minor_units(amount: Decimal, currency: &Currency) -> Result<i64, CoreError> {
    let overflow = || CoreError::AmountOverflow {
        amount,
        exponent: currency.exponent,
    };

    let multiplier = 10_u64.checked_pow(currency.exponent).ok_or_else(overflow)?;

    amount
        .checked_mul(Decimal::from(multiplier))
        .map(|scaled| scaled.trunc())
        .and_then(|scaled| scaled.to_i64())
        .ok_or_else(overflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn converts_whole_amounts() {
        assert_eq!(to_minor_units(dec!(50), &Currency::EUR).unwrap(), 5000);
        assert_eq!(to_minor_units(Decimal::from(10), &Currency::GBP).unwrap(), 1000);
    }

    #[test]
    fn truncates_excess_precision() {
        assert_eq!(to_minor_units(dec!(10.556), &Currency::EUR).unwrap(), 1055);
        assert_eq!(to_minor_units(dec!(0.019), &Currency::USD).unwrap(), 1);
        assert_eq!(to_minor_units(dec!(1.9999), &Currency::KWD).unwrap(), 1999);
    }

    #[test]
    fn truncates_negative_amounts_toward_zero() {
        assert_eq!(to_minor_units(dec!(-10.556), &Currency::EUR).unwrap(), -1055);
    }

    #[test]
    fn zero_exponent_keeps_integer_part() {
        assert_eq!(to_minor_units(dec!(1500.9), &Currency::JPY).unwrap(), 1500);
    }

    #[test]
    fn custom_currency_uses_its_exponent() {
        let bhd = Currency::new("BHD", 3);
        assert_eq!(bhd.code(), "BHD");
        assert_eq!(to_minor_units(dec!(2.5), &bhd).unwrap(), 2500);
    }

    #[test]
    fn huge_exponent_overflows() {
        let odd = Currency::new("XXX", 30);
        assert!(matches!(
            to_minor_units(dec!(1), &odd),
            Err(CoreError::AmountOverflow { exponent: 30, .. })
        ));
    }

    #[test]
    fn result_outside_i64_overflows() {
        let amount = Decimal::from(i64::MAX);
        assert!(to_minor_units(amount, &Currency::EUR).is_err());
    }

    #[test]
    fn currency_displays_as_code() {
        assert_eq!(Currency::CHF.to_string(), "CHF");
    }
}
