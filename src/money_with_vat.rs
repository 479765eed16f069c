// Copyright 2021 CoD Technologies Corp.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Net amount and VAT pair.

use crate::currency::CurrencyContext;
use crate::error::{MoneyError, ValidationError};
use crate::format::PublicMoneyWithVat;
use crate::money::{checked_div, Money};
use crate::precision::{CENTS_SCALE, MONEY_FIELD_PRECISION};
use crate::ratio::MoneyWithVatRatio;
use decimal_rs::Decimal;
use std::borrow::Borrow;
use std::cmp::Ordering;

/// Largest difference between the actual tax and the tax implied by a known rate for
/// [`MoneyWithVat::tax_rate_for_display`] to snap to that rate, i.e. `0.05`.
const DISPLAY_RATE_TOLERANCE: Decimal = rate(5);

const fn rate(percent: u128) -> Decimal {
    match Decimal::from_parts(percent, 2, false) {
        Ok(rate) => rate,
        Err(_) => Decimal::ZERO,
    }
}

/// VAT rates used in Germany.
pub const GERMAN_VAT_RATES: [Decimal; 5] = [rate(19), rate(16), rate(7), rate(5), Decimal::ZERO];

/// Legal VAT rates of Germany, Austria and Denmark, in lookup order.
pub const KNOWN_VAT_RATES: [Decimal; 9] = [
    rate(19),
    rate(16),
    rate(7),
    rate(5),
    rate(20),
    rate(13),
    rate(10),
    rate(25),
    Decimal::ZERO,
];

/// An amount split into net and tax.
///
/// Gross is always derived as `net + tax`. Two values with the same gross but a different
/// split are not equal, and are not ordered either.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct MoneyWithVat {
    net: Money,
    tax: Money,
}

/// Right hand side of a `MoneyWithVat` multiplication.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VatFactor {
    /// Scales net and tax alike.
    Scalar(Decimal),
    /// Scales net and gross separately, see [`MoneyWithVatRatio::apply`].
    Ratio(MoneyWithVatRatio),
}

impl From<Decimal> for VatFactor {
    #[inline]
    fn from(val: Decimal) -> Self {
        VatFactor::Scalar(val)
    }
}

impl From<MoneyWithVatRatio> for VatFactor {
    #[inline]
    fn from(val: MoneyWithVatRatio) -> Self {
        VatFactor::Ratio(val)
    }
}

macro_rules! impl_factor_from_int {
    ($($ty: ty), * $(,)?) => {
        $(
            impl From<$ty> for VatFactor {
                #[inline]
                fn from(val: $ty) -> Self {
                    VatFactor::Scalar(Decimal::from(val))
                }
            }
        )*
    };
}

impl_factor_from_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl MoneyWithVat {
    /// Zero net and zero tax.
    pub const ZERO: MoneyWithVat = MoneyWithVat {
        net: Money::ZERO,
        tax: Money::ZERO,
    };

    /// Creates a value from a net amount and its tax.
    #[inline]
    pub fn new<N: Into<Money>, T: Into<Money>>(net: N, tax: T) -> MoneyWithVat {
        MoneyWithVat {
            net: net.into(),
            tax: tax.into(),
        }
    }

    /// Creates a value where each missing part is zero.
    #[inline]
    pub fn from_parts(net: Option<Money>, tax: Option<Money>) -> MoneyWithVat {
        MoneyWithVat {
            net: net.unwrap_or(Money::ZERO),
            tax: tax.unwrap_or(Money::ZERO),
        }
    }

    #[inline]
    pub const fn net(&self) -> Money {
        self.net
    }

    #[inline]
    pub const fn tax(&self) -> Money {
        self.tax
    }

    /// Returns `net + tax`.
    #[inline]
    pub fn gross(&self) -> Money {
        self.net + self.tax
    }

    /// Returns `tax / net`, or zero if net is zero.
    ///
    /// A quotient beyond the decimal range also yields zero, see [`MoneyWithVat::try_tax_rate`]
    /// to get the error instead.
    pub fn tax_rate(&self) -> Decimal {
        match self.try_tax_rate() {
            Ok(rate) => rate,
            Err(e) => {
                log::debug!("tax rate of {:?} falls back to zero: {}", self, e);
                Decimal::ZERO
            }
        }
    }

    /// Returns `tax / net`, or zero if net is zero.
    ///
    /// Fails with [`MoneyError::Overflow`] if the quotient is out of the decimal range.
    pub fn try_tax_rate(&self) -> Result<Decimal, MoneyError> {
        if self.net.is_zero() {
            return Ok(Decimal::ZERO);
        }
        checked_div(&self.tax.amount(), self.net.amount())
    }

    /// Tax rate snapped to a known legal VAT rate if the tax is within 0.05 of what that rate
    /// implies, e.g. `0.1900091` becomes `0.19` but `0.23` stays.
    ///
    /// Meant for display only, never compute with the result.
    pub fn tax_rate_for_display(&self) -> Decimal {
        let tax_rate = self.tax_rate();
        if KNOWN_VAT_RATES.contains(&tax_rate) {
            return tax_rate;
        }

        let net = self.net.amount();
        let tax = self.tax.amount();
        KNOWN_VAT_RATES
            .iter()
            .copied()
            .find(|rate| (*rate * net - tax).abs() < DISPLAY_RATE_TOLERANCE)
            .unwrap_or(tax_rate)
    }

    /// Checks if both net and tax are zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.net.is_zero() && self.tax.is_zero()
    }

    /// Checks if gross is greater than zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.gross().is_positive()
    }

    /// Checks if gross is less than zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.gross().is_negative()
    }

    /// Absolute value of net and tax, each on its own.
    #[inline]
    pub const fn abs(&self) -> MoneyWithVat {
        MoneyWithVat {
            net: self.net.abs(),
            tax: self.tax.abs(),
        }
    }

    /// Rounds net to cents and derives tax from the gross rounded to cents, so that
    /// `result.gross() == self.gross().round(2)`.
    ///
    /// The tax rate of the result drifts, e.g. net `4.444` and tax `2.222` become net `4.44`
    /// and tax `2.23`. Use it for display and for comparing with user input only.
    pub fn rounded_to_cents(&self) -> MoneyWithVat {
        let net = self.net.round(CENTS_SCALE);
        MoneyWithVat {
            net,
            tax: self.gross().round(CENTS_SCALE) - net,
        }
    }

    /// Rounds net and tax independently to the persisted field precision, which yields what a
    /// storage round trip would.
    pub fn rounded_to_money_field_precision(&self) -> MoneyWithVat {
        let places = MONEY_FIELD_PRECISION.decimal_places as i16;
        MoneyWithVat {
            net: self.net.round(places),
            tax: self.tax.round(places),
        }
    }

    #[inline]
    fn gross_cents(&self) -> Money {
        self.gross().round(CENTS_SCALE)
    }

    /// Compares the grosses rounded to cents.
    #[inline]
    pub fn is_equal_up_to_cents(&self, other: &MoneyWithVat) -> bool {
        self.gross_cents() == other.gross_cents()
    }

    /// Compares the grosses rounded to cents.
    #[inline]
    pub fn is_lower_up_to_cents(&self, other: &MoneyWithVat) -> bool {
        self.gross_cents() < other.gross_cents()
    }

    /// Compares the grosses rounded to cents.
    #[inline]
    pub fn is_lower_or_equal_up_to_cents(&self, other: &MoneyWithVat) -> bool {
        self.gross_cents() <= other.gross_cents()
    }

    /// Divides by a scalar, returning an error if `divisor` is zero.
    #[inline]
    pub fn try_div(&self, divisor: Decimal) -> Result<MoneyWithVat, MoneyError> {
        Ok(MoneyWithVat {
            net: self.net.try_div(divisor)?,
            tax: self.tax.try_div(divisor)?,
        })
    }

    /// Returns the exact net and gross ratio of `dividend` to `divisor`.
    ///
    /// Fails with [`MoneyError::DivisionByZero`] if the net or gross of `divisor` is zero.
    #[inline]
    pub fn ratio(dividend: &MoneyWithVat, divisor: &MoneyWithVat) -> Result<MoneyWithVatRatio, MoneyError> {
        MoneyWithVatRatio::from_money_with_vat(dividend, divisor)
    }

    /// Like [`MoneyWithVat::ratio`] on both operands rounded to cents, which bounds the ratio
    /// for tiny divisors such as `0.00000000000001`.
    ///
    /// Returns `None` if an operand is missing or the rounded divisor has a zero part.
    pub fn safe_ratio(
        dividend: Option<&MoneyWithVat>,
        divisor: Option<&MoneyWithVat>,
    ) -> Option<MoneyWithVatRatio> {
        let (dividend, divisor) = match (dividend, divisor) {
            (Some(dividend), Some(divisor)) => (dividend.rounded_to_cents(), divisor.rounded_to_cents()),
            _ => return None,
        };

        match MoneyWithVatRatio::from_money_with_vat(&dividend, &divisor) {
            Ok(ratio) => Some(ratio),
            Err(e) => {
                log::debug!("no ratio of {:?} to {:?}: {}", dividend, divisor, e);
                None
            }
        }
    }

    /// Divides `dividend` by `divisor`, returning `None` if either is missing or `divisor`
    /// is zero.
    pub fn safe_ratio_decimal(dividend: Option<&MoneyWithVat>, divisor: Option<Decimal>) -> Option<MoneyWithVat> {
        let dividend = dividend?;
        let divisor = divisor.filter(|d| !d.is_zero())?;
        match dividend.try_div(divisor) {
            Ok(result) => Some(result),
            Err(e) => {
                log::debug!("cannot divide {:?} by {}: {}", dividend, divisor, e);
                None
            }
        }
    }

    /// Sums net and tax in a single pass, skipping `None`s.
    ///
    /// ```
    /// use money_rs::MoneyWithVat;
    ///
    /// let items = [Some(MoneyWithVat::new(1, 1)), None, Some(MoneyWithVat::new(2, 2))];
    /// assert_eq!(MoneyWithVat::fast_sum(items), MoneyWithVat::new(3, 3));
    /// assert_eq!(MoneyWithVat::fast_sum(Vec::<MoneyWithVat>::new()), MoneyWithVat::ZERO);
    /// ```
    #[inline]
    pub fn fast_sum<I>(operands: I) -> MoneyWithVat
    where
        I: IntoIterator,
        I::Item: Into<Option<MoneyWithVat>>,
    {
        Self::fast_sum_with_none(operands).unwrap_or(MoneyWithVat::ZERO)
    }

    /// Like [`MoneyWithVat::fast_sum`], but returns `None` if no operand was present.
    ///
    /// This tells "summed up to zero" apart from "nothing to sum".
    pub fn fast_sum_with_none<I>(operands: I) -> Option<MoneyWithVat>
    where
        I: IntoIterator,
        I::Item: Into<Option<MoneyWithVat>>,
    {
        let mut net = Decimal::ZERO;
        let mut tax = Decimal::ZERO;
        let mut present = false;

        for operand in operands.into_iter().filter_map(Into::<Option<MoneyWithVat>>::into) {
            net += operand.net.amount();
            tax += operand.tax.amount();
            present = true;
        }

        if present {
            Some(MoneyWithVat::new(net, tax))
        } else {
            None
        }
    }

    /// Composite maximum: net is the largest net, tax is the largest gross minus that net.
    ///
    /// The result need not equal any operand if the largest net and the largest gross come
    /// from different operands. Accepts arrays for a fixed number of operands as well as
    /// slices and vectors.
    pub fn max<I>(operands: I) -> Result<MoneyWithVat, MoneyError>
    where
        I: IntoIterator,
        I::Item: Borrow<MoneyWithVat>,
    {
        let mut iter = operands.into_iter();
        let first = iter.next().ok_or(ValidationError::NoOperands)?;
        let first: &MoneyWithVat = first.borrow();

        let (max_net, max_gross) = iter.fold((first.net, first.gross()), |(net, gross), item| {
            let item: &MoneyWithVat = item.borrow();
            (net.max(item.net), gross.max(item.gross()))
        });

        Ok(MoneyWithVat {
            net: max_net,
            tax: max_gross - max_net,
        })
    }

    /// Parses `{"amount_with_vat": {"net": {"amount": ..}, "gross": {"amount": ..}}}`, where
    /// amounts are numbers or numeric strings. Tax is `gross - net`.
    #[cfg(feature = "serde")]
    #[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
    pub fn from_json(value: &serde_json::Value) -> Result<MoneyWithVat, crate::error::InvalidJsonStructure> {
        let amount_with_vat = json::object_at(value, "amount_with_vat")?;
        let net = json::amount_at(amount_with_vat, "net")?;
        let gross = json::amount_at(amount_with_vat, "gross")?;
        Ok(MoneyWithVat::new(net, gross - net))
    }

    /// Projection for public API consumers which need the currency attached.
    pub fn for_public_api(&self, ctx: &CurrencyContext) -> Result<PublicMoneyWithVat, MoneyError> {
        Ok(PublicMoneyWithVat {
            net: self.net.canonical_string()?,
            tax: self.tax.canonical_string()?,
            currency: ctx.resolve(),
        })
    }
}

impl PartialOrd for MoneyWithVat {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        match self.gross().cmp(&other.gross()) {
            Ordering::Equal => None,
            ord => Some(ord),
        }
    }
}

#[cfg(feature = "serde")]
mod json {
    use crate::error::{JsonStructureCause, MoneyError, ValidationError};
    use decimal_rs::{Decimal, DecimalParseError};
    use serde_json::{Map, Value};

    pub(super) fn object_at<'a>(
        value: &'a Value,
        key: &'static str,
    ) -> Result<&'a Map<String, Value>, JsonStructureCause> {
        let obj = value.as_object().ok_or(JsonStructureCause::NotAnObject(key))?;
        let inner = obj.get(key).ok_or(JsonStructureCause::MissingKey(key))?;
        inner.as_object().ok_or(JsonStructureCause::NotAnObject(key))
    }

    pub(super) fn amount_at(obj: &Map<String, Value>, key: &'static str) -> Result<Decimal, JsonStructureCause> {
        let part = obj.get(key).ok_or(JsonStructureCause::MissingKey(key))?;
        let part = part.as_object().ok_or(JsonStructureCause::NotAnObject(key))?;
        let amount = part.get("amount").ok_or(JsonStructureCause::MissingKey("amount"))?;

        let parsed = match amount {
            Value::Number(n) => n.to_string().parse::<Decimal>().map_err(MoneyError::from),
            Value::String(s) => s.parse::<Decimal>().map_err(MoneyError::from),
            _ => Err(ValidationError::InvalidNumber(DecimalParseError::Invalid).into()),
        };
        parsed.map_err(|source| JsonStructureCause::InvalidAmount { key, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::Currency;

    fn vat(net: &str, tax: &str) -> MoneyWithVat {
        MoneyWithVat::new(money(net), money(tax))
    }

    fn money(s: &str) -> Money {
        s.parse().unwrap()
    }

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_default() {
        for subject in &[
            MoneyWithVat::default(),
            MoneyWithVat::from_parts(None, None),
            MoneyWithVat::new(0, 0),
            MoneyWithVat::ZERO,
        ] {
            assert!(subject.net().is_zero());
            assert!(subject.tax().is_zero());
            assert!(subject.gross().is_zero());
            assert!(subject.is_zero());
        }

        let half = MoneyWithVat::from_parts(Some(money("5")), None);
        assert_eq!(half, MoneyWithVat::new(5, 0));
    }

    #[test]
    fn test_gross() {
        let m = vat("100.10", "19.019");
        assert_eq!(m.gross(), money("119.119"));
        assert_eq!(m.gross(), m.net() + m.tax());
    }

    #[test]
    fn test_eq_and_ord() {
        assert_eq!(vat("100", "19"), vat("100.00", "19.0"));
        assert_ne!(vat("100", "19"), vat("101", "18"));

        assert!(MoneyWithVat::new(50, 0) > MoneyWithVat::new(30, 0));
        assert!(MoneyWithVat::new(50, -10) > MoneyWithVat::new(60, -30));
        assert!(MoneyWithVat::new(0, 10) > MoneyWithVat::new(60, -70));
        assert!(MoneyWithVat::new(-20, -20) < MoneyWithVat::new(-10, -10));
        assert!(MoneyWithVat::new(60, -70) < MoneyWithVat::new(0, 10));

        let a = MoneyWithVat::new(100, 19);
        let b = MoneyWithVat::new(101, 18);
        assert_eq!(a.partial_cmp(&b), None);
        assert!(!(a < b) && !(a > b));
        assert_eq!(a.partial_cmp(&a), Some(Ordering::Equal));
    }

    #[test]
    fn test_tax_rate() {
        fn assert_tax_rate(net: &str, tax: &str, expected: &str) {
            assert_eq!(vat(net, tax).tax_rate(), dec(expected), "tax_rate({}, {})", net, tax);
        }

        assert_tax_rate("100", "19", "0.19");
        assert_tax_rate("0", "23", "0");
        assert_tax_rate("100", "0", "0");
        assert_tax_rate("-100", "-19", "0.19");
        assert_eq!(vat("300", "20").tax_rate(), Decimal::from(20) / 300);
    }

    #[test]
    fn test_try_tax_rate() {
        assert_eq!(vat("100", "19").try_tax_rate(), Ok(dec("0.19")));
        assert_eq!(vat("0", "23").try_tax_rate(), Ok(Decimal::ZERO));

        let huge = vat("1e-100", "1e100");
        assert_eq!(huge.try_tax_rate(), Err(MoneyError::Overflow));
        assert_eq!(huge.tax_rate(), Decimal::ZERO);
    }

    #[test]
    fn test_tax_rate_for_display() {
        fn assert_display_rate(net: &str, tax: &str, expected: &str) {
            assert_eq!(
                vat(net, tax).tax_rate_for_display(),
                dec(expected),
                "tax_rate_for_display({}, {})",
                net,
                tax
            );
        }

        assert_display_rate("32299.8", "6136.96", "0.19");
        assert_display_rate("100", "19", "0.19");
        assert_display_rate("100", "19.00912", "0.19");
        assert_display_rate("100", "4.991", "0.05");
        assert_display_rate("0", "23", "0");
        assert_display_rate("100", "0", "0");
        assert_display_rate("-100", "-19", "0.19");
        assert_display_rate("300", "30", "0.10");
        assert_display_rate("100", "23", "0.23");

        // 0.19, 0.16, 0.07, 0.05 and more are all within tolerance, the first one wins.
        assert_display_rate("0.1", "0.0123", "0.19");
        assert_display_rate("0.1", "0.0063", "0.19");
        assert_display_rate("-0.1", "-0.0123", "0.19");
    }

    #[test]
    fn test_known_rates() {
        assert_eq!(KNOWN_VAT_RATES[0], dec("0.19"));
        assert_eq!(KNOWN_VAT_RATES[7], dec("0.25"));
        assert!(GERMAN_VAT_RATES.iter().all(|r| KNOWN_VAT_RATES.contains(r)));
    }

    #[test]
    fn test_sign() {
        assert!(!MoneyWithVat::new(0, 0).is_negative());
        assert!(!MoneyWithVat::new(0, 0).is_positive());
        assert!(vat("0.00000000000000000000001", "0").is_positive());
        assert!(vat("-0.00000000000000000000001", "0").is_negative());
        assert!(vat("10000000000000000000000", "0").is_positive());
        assert!(MoneyWithVat::new(10, -11).is_negative());
    }

    #[test]
    fn test_abs() {
        assert_eq!(MoneyWithVat::new(-10, 2).abs(), MoneyWithVat::new(10, 2));
    }

    #[test]
    fn test_ratio() {
        let ratio = MoneyWithVat::ratio(&MoneyWithVat::new(100, 19), &MoneyWithVat::new(100, 19)).unwrap();
        assert_eq!(ratio, MoneyWithVatRatio::new(Decimal::ONE, Decimal::ONE));

        let ratio = MoneyWithVat::ratio(&MoneyWithVat::new(200, 38), &MoneyWithVat::new(100, 19)).unwrap();
        assert_eq!(ratio, MoneyWithVatRatio::new(Decimal::from(2), Decimal::from(2)));

        let ratio = MoneyWithVat::ratio(&MoneyWithVat::new(100, 19), &vat("50", "9.5")).unwrap();
        assert_eq!(ratio, MoneyWithVatRatio::new(Decimal::from(2), Decimal::from(2)));

        assert_eq!(
            MoneyWithVat::ratio(&MoneyWithVat::new(200, 38), &MoneyWithVat::ZERO),
            Err(MoneyError::DivisionByZero)
        );
        assert_eq!(
            MoneyWithVat::ratio(&MoneyWithVat::new(200, 38), &MoneyWithVat::new(10, -10)),
            Err(MoneyError::DivisionByZero)
        );
    }

    #[test]
    fn test_ratio_scaling() {
        let m = MoneyWithVat::new(100, 19);
        let n = MoneyWithVat::new(200, 14);
        let ratio = MoneyWithVat::ratio(&m, &n).unwrap();

        assert_eq!((ratio * n).rounded_to_cents(), m.rounded_to_cents());
        assert_eq!((n * ratio).rounded_to_cents(), m.rounded_to_cents());

        let left = m * ratio + n * ratio;
        let right = (m + n) * ratio;
        assert_eq!(left.net(), right.net());
        assert!(left.is_equal_up_to_cents(&right));
    }

    #[test]
    fn test_safe_ratio() {
        let m = MoneyWithVat::new(1000000, 19);
        let zero = MoneyWithVat::ZERO;
        let almost_zero = vat("0.00000000000001", "0");

        assert_eq!(MoneyWithVat::safe_ratio(Some(&m), Some(&m)).unwrap().net_ratio(), Decimal::ONE);
        assert_eq!(MoneyWithVat::safe_ratio(Some(&m), Some(&zero)), None);
        assert_eq!(MoneyWithVat::safe_ratio(Some(&m), Some(&almost_zero)), None);
        assert_eq!(MoneyWithVat::safe_ratio(Some(&m), None), None);
        assert_eq!(MoneyWithVat::safe_ratio(None, None), None);
    }

    #[test]
    fn test_safe_ratio_decimal() {
        fn assert_safe(dividend: Option<MoneyWithVat>, divisor: Option<i32>, expected: Option<MoneyWithVat>) {
            let result = MoneyWithVat::safe_ratio_decimal(dividend.as_ref(), divisor.map(Decimal::from));
            assert_eq!(result, expected);
        }

        assert_safe(Some(MoneyWithVat::ZERO), Some(0), None);
        assert_safe(Some(MoneyWithVat::ZERO), None, None);
        assert_safe(None, Some(0), None);
        assert_safe(None, None, None);
        assert_safe(Some(MoneyWithVat::ZERO), Some(1), Some(MoneyWithVat::ZERO));
        assert_safe(Some(MoneyWithVat::new(1, 0)), Some(1), Some(MoneyWithVat::new(1, 0)));
        assert_safe(Some(MoneyWithVat::new(1, 0)), Some(2), Some(vat("0.5", "0")));
        assert_safe(Some(MoneyWithVat::new(1, 1)), Some(5), Some(vat("0.2", "0.2")));
    }

    #[test]
    fn test_rounded_to_cents() {
        fn assert_rounded(net: &str, tax: &str, expected_net: &str, expected_tax: &str) {
            let value = vat(net, tax);
            let rounded = value.rounded_to_cents();
            assert_eq!(rounded.net(), money(expected_net));
            assert_eq!(rounded.tax(), money(expected_tax));
            assert_eq!(rounded.gross(), money(expected_net) + money(expected_tax));
            assert_eq!(value.gross().round(2), rounded.net() + rounded.tax());
            assert_eq!(value.gross().round(2), rounded.gross());
        }

        assert_rounded("0", "0", "0", "0");
        assert_rounded("4.444", "2.222", "4.44", "2.23");
        assert_rounded("25357.9765600", "4818.0155464", "25357.98", "4818.01");
    }

    #[test]
    fn test_rounded_to_money_field_precision() {
        let value = vat("1.0000000000005", "0.0000000000015");
        let rounded = value.rounded_to_money_field_precision();
        assert_eq!(rounded.net(), money("1"));
        assert_eq!(rounded.tax(), money("0.000000000002"));
    }

    #[test]
    fn test_up_to_cents() {
        let zero = MoneyWithVat::ZERO;
        let cents = |s: &str| vat(s, "0");

        assert!(zero.is_equal_up_to_cents(&cents("0.001")));
        assert!(cents("600.001").is_equal_up_to_cents(&cents("599.9966")));
        assert!(cents("123.004").is_equal_up_to_cents(&cents("123.001")));
        assert!(cents("0.012").is_equal_up_to_cents(&cents("0.007")));
        assert!(!zero.is_equal_up_to_cents(&cents("0.01")));
        assert!(!cents("1.006").is_equal_up_to_cents(&cents("1.004")));
        assert!(!cents("-1.006").is_equal_up_to_cents(&cents("-1.004")));

        assert!(zero.is_lower_or_equal_up_to_cents(&cents("-0.001")));
        assert!(cents("0.002").is_lower_or_equal_up_to_cents(&cents("0.007")));
        assert!(cents("2").is_lower_or_equal_up_to_cents(&cents("7")));
        assert!(!zero.is_lower_or_equal_up_to_cents(&cents("-0.01")));
        assert!(!cents("1.006").is_lower_or_equal_up_to_cents(&cents("1.004")));

        assert!(zero.is_lower_up_to_cents(&cents("0.009")));
        assert!(cents("0.002").is_lower_up_to_cents(&cents("0.007")));
        assert!(!zero.is_lower_up_to_cents(&cents("-0.001")));
        assert!(!cents("0.999").is_lower_up_to_cents(&cents("1.004")));
    }

    #[test]
    fn test_fast_sum() {
        assert_eq!(MoneyWithVat::fast_sum(Vec::<MoneyWithVat>::new()), MoneyWithVat::ZERO);
        assert_eq!(
            MoneyWithVat::fast_sum(vec![MoneyWithVat::new(1, 1), MoneyWithVat::new(2, 2)]),
            MoneyWithVat::new(3, 3)
        );
        assert_eq!(
            MoneyWithVat::fast_sum(vec![Some(MoneyWithVat::new(1, -1)), None]),
            MoneyWithVat::new(1, -1)
        );
        let items = [MoneyWithVat::new(-1, 1), MoneyWithVat::ZERO];
        assert_eq!(MoneyWithVat::fast_sum(&items), MoneyWithVat::new(-1, 1));
    }

    #[test]
    fn test_fast_sum_with_none() {
        assert_eq!(MoneyWithVat::fast_sum_with_none(Vec::<Option<MoneyWithVat>>::new()), None);
        assert_eq!(MoneyWithVat::fast_sum_with_none(vec![None::<MoneyWithVat>, None, None]), None);
        assert_eq!(
            MoneyWithVat::fast_sum_with_none(vec![MoneyWithVat::ZERO; 3]),
            Some(MoneyWithVat::ZERO)
        );
        assert_eq!(
            MoneyWithVat::fast_sum_with_none(vec![Some(MoneyWithVat::new(1, -1)), None]),
            Some(MoneyWithVat::new(1, -1))
        );
        assert_eq!(
            MoneyWithVat::fast_sum_with_none(vec![None, Some(MoneyWithVat::ZERO)]),
            Some(MoneyWithVat::ZERO)
        );
    }

    #[test]
    fn test_max() {
        let items = vec![
            MoneyWithVat::new(100, 19),
            MoneyWithVat::new(112, 999),
            MoneyWithVat::new(1, 2),
            MoneyWithVat::new(99999, 0),
        ];
        let max = MoneyWithVat::max(&items).unwrap();
        assert_eq!(max.net(), Money::from(99999));
        assert_eq!(max.tax(), Money::ZERO);
        assert_eq!(max.gross(), Money::from(99999));

        let max = MoneyWithVat::max([MoneyWithVat::new(100, 19), MoneyWithVat::new(50, 950)]).unwrap();
        assert_eq!(max.net(), Money::from(100));
        assert_eq!(max.tax(), Money::from(900));
        assert_eq!(max.gross(), Money::from(1000));

        assert_eq!(MoneyWithVat::max(&items[..1]).unwrap(), MoneyWithVat::new(100, 19));

        let max = MoneyWithVat::max([vat("100.0000001", "19"), vat("100.00000001", "999"), vat("1", "2")]).unwrap();
        assert_eq!(max.net(), money("100.0000001"));
        assert_eq!(max.gross(), money("1099.00000001"));

        assert_eq!(
            MoneyWithVat::max(Vec::<MoneyWithVat>::new()),
            Err(ValidationError::NoOperands.into())
        );
    }

    #[test]
    fn test_try_div() {
        assert_eq!(MoneyWithVat::new(10, 2).try_div(Decimal::from(2)), Ok(MoneyWithVat::new(5, 1)));
        assert_eq!(MoneyWithVat::new(10, 2).try_div(Decimal::ZERO), Err(MoneyError::DivisionByZero));
    }

    #[test]
    fn test_for_public_api() {
        let public = MoneyWithVat::new(100, 19)
            .for_public_api(&CurrencyContext::new(Currency::EUR))
            .unwrap();
        assert_eq!(public.net, "100.000000000000");
        assert_eq!(public.tax, "19.000000000000");
        assert_eq!(public.currency, Currency::EUR);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json() {
        use crate::error::JsonStructureCause;
        use serde_json::json;

        let value = json!({
            "amount_with_vat": {
                "gross": {"amount": 111, "currency": "EUR"},
                "net": {"amount": "100", "currency": "EUR"},
            }
        });
        let result = MoneyWithVat::from_json(&value).unwrap();
        assert_eq!(result.tax(), Money::from(11));
        assert_eq!(result.tax_rate(), dec("0.11"));

        let value = json!({
            "amount_with_vat": {
                "gross": {"amount": 123, "currency": "EUR"},
                "net": {"amount": 0, "currency": "EUR"},
            }
        });
        let result = MoneyWithVat::from_json(&value).unwrap();
        assert_eq!(result.tax(), Money::from(123));
        assert_eq!(result.tax_rate(), Decimal::ZERO);

        let value = json!({"amount_with_vat": {"grozz": null, "net": {"shrug": true}}});
        let err = MoneyWithVat::from_json(&value).unwrap_err();
        assert_eq!(err.cause(), &JsonStructureCause::MissingKey("amount"));

        for empty in &[json!({}), json!(null), json!([])] {
            assert!(MoneyWithVat::from_json(empty).is_err());
        }

        for invalid in &[json!(null), json!("not a number"), json!(true)] {
            let value = json!({
                "amount_with_vat": {
                    "gross": {"amount": invalid, "currency": "EUR"},
                    "net": {"amount": 100, "currency": "USD"},
                }
            });
            let err = MoneyWithVat::from_json(&value).unwrap_err();
            assert!(matches!(err.cause(), JsonStructureCause::InvalidAmount { key: "gross", .. }));
        }
    }
}
