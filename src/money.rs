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

//! Money implementation.

use crate::currency::{Currency, CurrencyContext};
use crate::error::MoneyError;
use crate::format::{self, MoneyFormatter, PublicMoney};
use crate::precision::{round_half_even, MONEY_FIELD_PRECISION};
use decimal_rs::Decimal;
use std::fmt;

/// An exact decimal money amount.
///
/// The currency is not part of the value: equality, ordering and hashing only look at the
/// amount, and `1.0 == 1.00`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money {
    amount: Decimal,
}

impl Money {
    /// Zero value, the identity of money addition.
    pub const ZERO: Money = Money { amount: Decimal::ZERO };

    /// Creates a `Money` from a decimal amount.
    #[inline]
    pub const fn new(amount: Decimal) -> Money {
        Money { amount }
    }

    /// Returns the amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Checks if `self` is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Checks if `self` is greater than zero.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        !self.amount.is_zero() && self.amount.is_sign_positive()
    }

    /// Checks if `self` is less than zero.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        !self.amount.is_zero() && self.amount.is_sign_negative()
    }

    /// Computes the absolute value of `self`.
    #[inline]
    pub const fn abs(&self) -> Money {
        Money {
            amount: self.amount.abs(),
        }
    }

    /// Rounds to `n` digits after the decimal point, ties to even.
    /// A negative `n` rounds before the decimal point.
    #[inline]
    pub fn round(&self, n: i16) -> Money {
        Money {
            amount: round_half_even(&self.amount, n),
        }
    }

    /// Like [`Money::round`], an absent digit count rounds to zero digits.
    #[inline]
    pub fn round_opt(&self, n: Option<i16>) -> Money {
        self.round(n.unwrap_or(0))
    }

    /// Divides by a scalar, returning an error if `divisor` is zero.
    #[inline]
    pub fn try_div(&self, divisor: Decimal) -> Result<Money, MoneyError> {
        checked_div(&self.amount, divisor).map(Money::new)
    }

    /// Divides by another amount, giving a dimensionless ratio.
    #[inline]
    pub fn try_div_money(&self, divisor: &Money) -> Result<Decimal, MoneyError> {
        checked_div(&self.amount, divisor.amount)
    }

    /// Multiplies by a scalar, returning an error on overflow.
    #[inline]
    pub fn try_mul(&self, factor: Decimal) -> Result<Money, MoneyError> {
        self.amount
            .checked_mul(factor)
            .map(Money::new)
            .ok_or(MoneyError::Overflow)
    }

    /// Returns the canonical string: fixed point with 12 fractional digits, never in
    /// exponential notation, e.g. `"123.123456789012"`.
    ///
    /// Fails if the amount has more than 16 integer digits.
    pub fn canonical_string(&self) -> Result<String, MoneyError> {
        let mut out = String::with_capacity(32);
        format::write_fixed(&self.amount, MONEY_FIELD_PRECISION, &mut out)?;
        Ok(out)
    }

    /// Returns the amount and the resolved currency, which is all a locale aware formatter needs.
    #[inline]
    pub fn display_parts(&self, ctx: &CurrencyContext) -> (Decimal, Currency) {
        (self.amount, ctx.resolve())
    }

    /// Formats `self` with an external locale aware formatter.
    #[inline]
    pub fn format_with<F: MoneyFormatter + ?Sized>(
        &self,
        formatter: &F,
        ctx: &CurrencyContext,
        locale: Option<&str>,
    ) -> String {
        let (amount, currency) = self.display_parts(ctx);
        formatter.format(&amount, currency, locale)
    }

    /// Projection for public API consumers which need the currency attached.
    #[inline]
    pub fn for_public_api(&self, ctx: &CurrencyContext) -> Result<PublicMoney, MoneyError> {
        Ok(PublicMoney {
            amount: self.canonical_string()?,
            currency: ctx.resolve(),
        })
    }
}

#[inline]
pub(crate) fn checked_div(dividend: &Decimal, divisor: Decimal) -> Result<Decimal, MoneyError> {
    if divisor.is_zero() {
        return Err(MoneyError::DivisionByZero);
    }
    dividend.checked_div(divisor).ok_or(MoneyError::Overflow)
}

impl fmt::Display for Money {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.amount, f)
    }
}
