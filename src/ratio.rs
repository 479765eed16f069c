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

//! Dimensionless net and gross ratio.

use crate::error::MoneyError;
use crate::money::checked_div;
use crate::money_with_vat::MoneyWithVat;
use decimal_rs::Decimal;
use std::fmt;

/// Ratio of two [`MoneyWithVat`] values, kept separately for net and gross.
///
/// After rounding the two ratios can diverge, so scaling a value by a ratio recomputes net
/// and gross independently instead of scaling the tax.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct MoneyWithVatRatio {
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::serde::deserialize_decimal"))]
    net_ratio: Decimal,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::serde::deserialize_decimal"))]
    gross_ratio: Decimal,
}

impl MoneyWithVatRatio {
    #[inline]
    pub const fn new(net_ratio: Decimal, gross_ratio: Decimal) -> MoneyWithVatRatio {
        MoneyWithVatRatio { net_ratio, gross_ratio }
    }

    /// Both ratios zero.
    #[inline]
    pub const fn zero() -> MoneyWithVatRatio {
        MoneyWithVatRatio::new(Decimal::ZERO, Decimal::ZERO)
    }

    /// Divides the nets and the grosses of `dividend` and `divisor`.
    pub fn from_money_with_vat(
        dividend: &MoneyWithVat,
        divisor: &MoneyWithVat,
    ) -> Result<MoneyWithVatRatio, MoneyError> {
        let net_ratio = checked_div(&dividend.net().amount(), divisor.net().amount())?;
        let gross_ratio = checked_div(&dividend.gross().amount(), divisor.gross().amount())?;
        Ok(MoneyWithVatRatio { net_ratio, gross_ratio })
    }

    #[inline]
    pub const fn net_ratio(&self) -> Decimal {
        self.net_ratio
    }

    #[inline]
    pub const fn gross_ratio(&self) -> Decimal {
        self.gross_ratio
    }

    /// Scales `value`: the new net is `net_ratio * net` and the new gross is exactly
    /// `gross_ratio * gross`.
    #[inline]
    pub fn apply(&self, value: &MoneyWithVat) -> MoneyWithVat {
        let net = value.net() * self.net_ratio;
        let gross = value.gross() * self.gross_ratio;
        MoneyWithVat::new(net, gross - net)
    }

    /// Divides both ratios by a scalar, returning an error if `divisor` is zero.
    #[inline]
    pub fn try_div(&self, divisor: Decimal) -> Result<MoneyWithVatRatio, MoneyError> {
        Ok(MoneyWithVatRatio {
            net_ratio: checked_div(&self.net_ratio, divisor)?,
            gross_ratio: checked_div(&self.gross_ratio, divisor)?,
        })
    }
}

impl fmt::Display for MoneyWithVatRatio {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "MoneyWithVATRatio({}, {})", self.net_ratio, self.gross_ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_from_money_with_vat() {
        let ratio =
            MoneyWithVatRatio::from_money_with_vat(&MoneyWithVat::new(200, 38), &MoneyWithVat::new(100, 19)).unwrap();
        assert_eq!(ratio.net_ratio(), Decimal::from(2));
        assert_eq!(ratio.gross_ratio(), Decimal::from(2));

        let ratio =
            MoneyWithVatRatio::from_money_with_vat(&MoneyWithVat::new(50, 20), &MoneyWithVat::new(100, 0)).unwrap();
        assert_eq!(ratio, MoneyWithVatRatio::new(dec("0.5"), dec("0.7")));

        assert_eq!(
            MoneyWithVatRatio::from_money_with_vat(&MoneyWithVat::new(1, 1), &MoneyWithVat::new(0, 5)),
            Err(MoneyError::DivisionByZero)
        );
    }

    #[test]
    fn test_zero() {
        assert_eq!(MoneyWithVatRatio::zero(), MoneyWithVatRatio::default());
        assert_eq!(MoneyWithVatRatio::zero().apply(&MoneyWithVat::new(100, 19)), MoneyWithVat::ZERO);
    }

    #[test]
    fn test_apply_keeps_gross() {
        let ratio = MoneyWithVatRatio::new(dec("0.3"), dec("0.35"));
        let value = MoneyWithVat::new(dec("100"), dec("19"));
        let scaled = ratio.apply(&value);
        assert_eq!(scaled.net(), Money::from(30));
        assert_eq!(scaled.gross(), (value.gross() * dec("0.35")));
    }

    #[test]
    fn test_eq() {
        assert_eq!(
            MoneyWithVatRatio::new(dec("1.0"), dec("2")),
            MoneyWithVatRatio::new(dec("1"), dec("2.00"))
        );
        assert_ne!(
            MoneyWithVatRatio::new(dec("1"), dec("2")),
            MoneyWithVatRatio::new(dec("2"), dec("1"))
        );
    }

    #[test]
    fn test_try_div() {
        let ratio = MoneyWithVatRatio::new(dec("1"), dec("2"));
        assert_eq!(ratio.try_div(dec("4")), Ok(MoneyWithVatRatio::new(dec("0.25"), dec("0.5"))));
        assert_eq!(ratio.try_div(Decimal::ZERO), Err(MoneyError::DivisionByZero));
    }

    #[test]
    fn test_display() {
        let ratio = MoneyWithVatRatio::new(dec("0.5"), dec("1.25"));
        assert_eq!(ratio.to_string(), "MoneyWithVATRatio(0.5, 1.25)");
    }
}
