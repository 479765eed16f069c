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

//! Runtime typed arithmetic.
//!
//! Values coming from untyped input, e.g. an expression evaluator, carry their kind along.
//! The statically typed operators only exist for meaningful combinations; [`Operand`]
//! reports every other combination as [`MoneyError::UnsupportedOperation`].

use crate::error::MoneyError;
use crate::money::{checked_div, Money};
use crate::money_with_vat::MoneyWithVat;
use crate::ratio::MoneyWithVatRatio;
use decimal_rs::Decimal;

/// A value of any of the money kinds, or a plain scalar.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Operand {
    Scalar(Decimal),
    Money(Money),
    WithVat(MoneyWithVat),
    Ratio(MoneyWithVatRatio),
}

impl Operand {
    /// Name of the kind, as used in error messages.
    #[inline]
    pub const fn kind(&self) -> &'static str {
        match self {
            Operand::Scalar(_) => "Decimal",
            Operand::Money(_) => "Money",
            Operand::WithVat(_) => "MoneyWithVat",
            Operand::Ratio(_) => "MoneyWithVatRatio",
        }
    }

    /// Checks if `self` is the scalar zero, the only scalar which may be added to money.
    #[inline]
    fn is_scalar_zero(&self) -> bool {
        matches!(self, Operand::Scalar(s) if s.is_zero())
    }

    #[inline]
    fn unsupported(&self, op: &'static str, other: &Operand) -> MoneyError {
        MoneyError::UnsupportedOperation {
            op,
            lhs: self.kind(),
            rhs: other.kind(),
        }
    }

    /// Adds two operands of the same kind.
    ///
    /// A scalar zero on the left is the identity for `Money` and `MoneyWithVat`, so folds may
    /// start from it.
    pub fn checked_add(&self, other: &Operand) -> Result<Operand, MoneyError> {
        let result = match (self, other) {
            (Operand::Scalar(a), Operand::Scalar(b)) => Operand::Scalar(add(a, b)?),
            (Operand::Money(a), Operand::Money(b)) => Operand::Money(Money::new(add(&a.amount(), &b.amount())?)),
            (Operand::WithVat(a), Operand::WithVat(b)) => Operand::WithVat(MoneyWithVat::new(
                add(&a.net().amount(), &b.net().amount())?,
                add(&a.tax().amount(), &b.tax().amount())?,
            )),
            (Operand::Ratio(a), Operand::Ratio(b)) => Operand::Ratio(MoneyWithVatRatio::new(
                add(&a.net_ratio(), &b.net_ratio())?,
                add(&a.gross_ratio(), &b.gross_ratio())?,
            )),
            (lhs, Operand::Money(_)) | (lhs, Operand::WithVat(_)) if lhs.is_scalar_zero() => *other,
            _ => return Err(self.unsupported("+", other)),
        };
        Ok(result)
    }

    /// Subtracts two operands of the same kind. A scalar zero on the left negates.
    pub fn checked_sub(&self, other: &Operand) -> Result<Operand, MoneyError> {
        match (self, other) {
            (lhs, Operand::Money(_)) | (lhs, Operand::WithVat(_)) if lhs.is_scalar_zero() => Ok(other.neg()),
            (Operand::Scalar(_), Operand::Scalar(_))
            | (Operand::Money(_), Operand::Money(_))
            | (Operand::WithVat(_), Operand::WithVat(_))
            | (Operand::Ratio(_), Operand::Ratio(_)) => self.checked_add(&other.neg()),
            _ => Err(self.unsupported("-", other)),
        }
    }

    /// Multiplies by a scalar, or a `MoneyWithVat` by a ratio. `Money * Money` is unsupported.
    pub fn checked_mul(&self, other: &Operand) -> Result<Operand, MoneyError> {
        let result = match (self, other) {
            (Operand::Scalar(a), Operand::Scalar(b)) => Operand::Scalar(mul(a, b)?),
            (Operand::Money(m), Operand::Scalar(s)) | (Operand::Scalar(s), Operand::Money(m)) => {
                Operand::Money(m.try_mul(*s)?)
            }
            (Operand::WithVat(v), Operand::Scalar(s)) | (Operand::Scalar(s), Operand::WithVat(v)) => {
                Operand::WithVat(MoneyWithVat::new(
                    mul(&v.net().amount(), s)?,
                    mul(&v.tax().amount(), s)?,
                ))
            }
            (Operand::Ratio(r), Operand::Scalar(s)) | (Operand::Scalar(s), Operand::Ratio(r)) => {
                Operand::Ratio(MoneyWithVatRatio::new(mul(&r.net_ratio(), s)?, mul(&r.gross_ratio(), s)?))
            }
            (Operand::WithVat(v), Operand::Ratio(r)) | (Operand::Ratio(r), Operand::WithVat(v)) => {
                let net = mul(&v.net().amount(), &r.net_ratio())?;
                let gross = mul(&v.gross().amount(), &r.gross_ratio())?;
                let tax = gross.checked_sub(net).ok_or(MoneyError::Overflow)?;
                Operand::WithVat(MoneyWithVat::new(net, tax))
            }
            _ => return Err(self.unsupported("*", other)),
        };
        Ok(result)
    }

    /// Divides by a scalar, or `Money` by `Money` giving a scalar.
    pub fn checked_div(&self, other: &Operand) -> Result<Operand, MoneyError> {
        let result = match (self, other) {
            (Operand::Scalar(a), Operand::Scalar(b)) => Operand::Scalar(checked_div(a, *b)?),
            (Operand::Money(m), Operand::Scalar(s)) => Operand::Money(m.try_div(*s)?),
            (Operand::Money(a), Operand::Money(b)) => Operand::Scalar(a.try_div_money(b)?),
            (Operand::WithVat(v), Operand::Scalar(s)) => Operand::WithVat(v.try_div(*s)?),
            (Operand::Ratio(r), Operand::Scalar(s)) => Operand::Ratio(r.try_div(*s)?),
            _ => return Err(self.unsupported("/", other)),
        };
        Ok(result)
    }

    /// Negates any operand.
    #[inline]
    pub fn neg(&self) -> Operand {
        match self {
            Operand::Scalar(s) => Operand::Scalar(-*s),
            Operand::Money(m) => Operand::Money(-*m),
            Operand::WithVat(v) => Operand::WithVat(-*v),
            Operand::Ratio(r) => Operand::Ratio(-*r),
        }
    }
}

#[inline]
fn add(a: &Decimal, b: &Decimal) -> Result<Decimal, MoneyError> {
    a.checked_add(*b).ok_or(MoneyError::Overflow)
}

#[inline]
fn mul(a: &Decimal, b: &Decimal) -> Result<Decimal, MoneyError> {
    a.checked_mul(*b).ok_or(MoneyError::Overflow)
}

impl From<Decimal> for Operand {
    #[inline]
    fn from(val: Decimal) -> Self {
        Operand::Scalar(val)
    }
}

impl From<Money> for Operand {
    #[inline]
    fn from(val: Money) -> Self {
        Operand::Money(val)
    }
}

impl From<MoneyWithVat> for Operand {
    #[inline]
    fn from(val: MoneyWithVat) -> Self {
        Operand::WithVat(val)
    }
}

impl From<MoneyWithVatRatio> for Operand {
    #[inline]
    fn from(val: MoneyWithVatRatio) -> Self {
        Operand::Ratio(val)
    }
}
