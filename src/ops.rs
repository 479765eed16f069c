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

//! Ops implementation.
//!
//! Operators panic on overflow and division by zero like the ones of `Decimal` do. Use the
//! `try_*` methods where the divisor may be zero.

use crate::money::Money;
use crate::money_with_vat::{MoneyWithVat, VatFactor};
use crate::ratio::MoneyWithVatRatio;
use decimal_rs::Decimal;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

macro_rules! forward_ref_unop {
    ($op: ident { $method: ident } $ty: ty) => {
        impl $op for &'_ $ty {
            type Output = $ty;

            #[inline(always)]
            fn $method(self) -> Self::Output {
                (*self).$method()
            }
        }
    };
}

macro_rules! forward_ref_binop {
    ($op: ident { $method: ident } $lhs: ty, $rhs: ty => $out: ty) => {
        impl $op<&'_ $rhs> for $lhs {
            type Output = $out;

            #[inline(always)]
            fn $method(self, other: &$rhs) -> Self::Output {
                self.$method(*other)
            }
        }

        impl $op<$rhs> for &'_ $lhs {
            type Output = $out;

            #[inline(always)]
            fn $method(self, other: $rhs) -> Self::Output {
                (*self).$method(other)
            }
        }

        impl $op<&'_ $rhs> for &'_ $lhs {
            type Output = $out;

            #[inline(always)]
            fn $method(self, other: &$rhs) -> Self::Output {
                (*self).$method(*other)
            }
        }
    };
}

macro_rules! impl_assign {
    ($op: ident { $method: ident => $bin: ident } $lhs: ty, $rhs: ty) => {
        impl $op<$rhs> for $lhs {
            #[inline(always)]
            fn $method(&mut self, other: $rhs) {
                *self = (*self).$bin(other);
            }
        }
    };
}

// Money

impl Neg for Money {
    type Output = Money;

    #[inline]
    fn neg(self) -> Self::Output {
        Money::new(-self.amount())
    }
}

impl Add for Money {
    type Output = Money;

    #[inline]
    fn add(self, other: Money) -> Self::Output {
        Money::new(self.amount() + other.amount())
    }
}

impl Sub for Money {
    type Output = Money;

    #[inline]
    fn sub(self, other: Money) -> Self::Output {
        Money::new(self.amount() - other.amount())
    }
}

impl Mul<Decimal> for Money {
    type Output = Money;

    #[inline]
    fn mul(self, other: Decimal) -> Self::Output {
        Money::new(self.amount() * other)
    }
}

impl Mul<Money> for Decimal {
    type Output = Money;

    #[inline]
    fn mul(self, other: Money) -> Self::Output {
        other * self
    }
}

impl Div<Decimal> for Money {
    type Output = Money;

    #[inline]
    fn div(self, other: Decimal) -> Self::Output {
        Money::new(self.amount() / other)
    }
}

/// Dividing two amounts gives a plain ratio.
impl Div for Money {
    type Output = Decimal;

    #[inline]
    fn div(self, other: Money) -> Self::Output {
        self.amount() / other.amount()
    }
}

forward_ref_unop!(Neg { neg } Money);
forward_ref_binop!(Add { add } Money, Money => Money);
forward_ref_binop!(Sub { sub } Money, Money => Money);
forward_ref_binop!(Mul { mul } Money, Decimal => Money);
forward_ref_binop!(Div { div } Money, Decimal => Money);
forward_ref_binop!(Div { div } Money, Money => Decimal);
impl_assign!(AddAssign { add_assign => add } Money, Money);
impl_assign!(SubAssign { sub_assign => sub } Money, Money);
impl_assign!(MulAssign { mul_assign => mul } Money, Decimal);
impl_assign!(DivAssign { div_assign => div } Money, Decimal);

// MoneyWithVat

impl Neg for MoneyWithVat {
    type Output = MoneyWithVat;

    #[inline]
    fn neg(self) -> Self::Output {
        MoneyWithVat::new(-self.net(), -self.tax())
    }
}

impl Add for MoneyWithVat {
    type Output = MoneyWithVat;

    #[inline]
    fn add(self, other: MoneyWithVat) -> Self::Output {
        MoneyWithVat::new(self.net() + other.net(), self.tax() + other.tax())
    }
}

impl Sub for MoneyWithVat {
    type Output = MoneyWithVat;

    #[inline]
    fn sub(self, other: MoneyWithVat) -> Self::Output {
        MoneyWithVat::new(self.net() - other.net(), self.tax() - other.tax())
    }
}

impl<F: Into<VatFactor>> Mul<F> for MoneyWithVat {
    type Output = MoneyWithVat;

    #[inline]
    fn mul(self, other: F) -> Self::Output {
        match other.into() {
            VatFactor::Scalar(factor) => MoneyWithVat::new(self.net() * factor, self.tax() * factor),
            VatFactor::Ratio(ratio) => ratio.apply(&self),
        }
    }
}

impl Mul<MoneyWithVat> for Decimal {
    type Output = MoneyWithVat;

    #[inline]
    fn mul(self, other: MoneyWithVat) -> Self::Output {
        other * self
    }
}

impl Div<Decimal> for MoneyWithVat {
    type Output = MoneyWithVat;

    #[inline]
    fn div(self, other: Decimal) -> Self::Output {
        MoneyWithVat::new(self.net() / other, self.tax() / other)
    }
}

forward_ref_unop!(Neg { neg } MoneyWithVat);
forward_ref_binop!(Add { add } MoneyWithVat, MoneyWithVat => MoneyWithVat);
forward_ref_binop!(Sub { sub } MoneyWithVat, MoneyWithVat => MoneyWithVat);
forward_ref_binop!(Div { div } MoneyWithVat, Decimal => MoneyWithVat);
impl_assign!(AddAssign { add_assign => add } MoneyWithVat, MoneyWithVat);
impl_assign!(SubAssign { sub_assign => sub } MoneyWithVat, MoneyWithVat);

// MoneyWithVatRatio

impl Neg for MoneyWithVatRatio {
    type Output = MoneyWithVatRatio;

    #[inline]
    fn neg(self) -> Self::Output {
        MoneyWithVatRatio::new(-self.net_ratio(), -self.gross_ratio())
    }
}

impl Add for MoneyWithVatRatio {
    type Output = MoneyWithVatRatio;

    #[inline]
    fn add(self, other: MoneyWithVatRatio) -> Self::Output {
        MoneyWithVatRatio::new(
            self.net_ratio() + other.net_ratio(),
            self.gross_ratio() + other.gross_ratio(),
        )
    }
}

impl Sub for MoneyWithVatRatio {
    type Output = MoneyWithVatRatio;

    #[inline]
    fn sub(self, other: MoneyWithVatRatio) -> Self::Output {
        self + -other
    }
}

impl Mul<Decimal> for MoneyWithVatRatio {
    type Output = MoneyWithVatRatio;

    #[inline]
    fn mul(self, other: Decimal) -> Self::Output {
        MoneyWithVatRatio::new(self.net_ratio() * other, self.gross_ratio() * other)
    }
}

impl Div<Decimal> for MoneyWithVatRatio {
    type Output = MoneyWithVatRatio;

    #[inline]
    fn div(self, other: Decimal) -> Self::Output {
        MoneyWithVatRatio::new(self.net_ratio() / other, self.gross_ratio() / other)
    }
}

impl Mul<MoneyWithVat> for MoneyWithVatRatio {
    type Output = MoneyWithVat;

    #[inline]
    fn mul(self, other: MoneyWithVat) -> Self::Output {
        self.apply(&other)
    }
}

forward_ref_unop!(Neg { neg } MoneyWithVatRatio);
forward_ref_binop!(Add { add } MoneyWithVatRatio, MoneyWithVatRatio => MoneyWithVatRatio);
forward_ref_binop!(Sub { sub } MoneyWithVatRatio, MoneyWithVatRatio => MoneyWithVatRatio);
forward_ref_binop!(Mul { mul } MoneyWithVatRatio, Decimal => MoneyWithVatRatio);
forward_ref_binop!(Div { div } MoneyWithVatRatio, Decimal => MoneyWithVatRatio);
forward_ref_binop!(Mul { mul } MoneyWithVatRatio, MoneyWithVat => MoneyWithVat);

// Primitive integer scalars

macro_rules! impl_scalar_with_num {
    ($ty: ty; $int: ty) => {
        impl Mul<$int> for $ty {
            type Output = $ty;

            #[inline(always)]
            fn mul(self, other: $int) -> Self::Output {
                self * Decimal::from(other)
            }
        }

        impl Div<$int> for $ty {
            type Output = $ty;

            #[inline(always)]
            fn div(self, other: $int) -> Self::Output {
                self / Decimal::from(other)
            }
        }
    };
    ($ty: ty; $($int: ty), * $(,)?) => {
        $(impl_scalar_with_num!($ty; $int);)*
    };
}

macro_rules! impl_num_times {
    ($ty: ty; $($int: ty), * $(,)?) => {
        $(
            impl Mul<$ty> for $int {
                type Output = $ty;

                #[inline(always)]
                fn mul(self, other: $ty) -> Self::Output {
                    Decimal::from(self) * other
                }
            }
        )*
    };
}

impl_scalar_with_num!(Money; u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
impl_scalar_with_num!(MoneyWithVatRatio; u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
impl_num_times!(Money; u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
impl_num_times!(MoneyWithVat; u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

macro_rules! impl_vat_div_with_num {
    ($($int: ty), * $(,)?) => {
        $(
            impl Div<$int> for MoneyWithVat {
                type Output = MoneyWithVat;

                #[inline(always)]
                fn div(self, other: $int) -> Self::Output {
                    self / Decimal::from(other)
                }
            }
        )*
    };
}

impl_vat_div_with_num!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

// Folds start from the explicit zero.

impl Sum for Money {
    #[inline]
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Money> for Money {
    #[inline]
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, |acc, x| acc + x)
    }
}

impl Sum for MoneyWithVat {
    #[inline]
    fn sum<I: Iterator<Item = MoneyWithVat>>(iter: I) -> Self {
        iter.fold(MoneyWithVat::ZERO, |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a MoneyWithVat> for MoneyWithVat {
    #[inline]
    fn sum<I: Iterator<Item = &'a MoneyWithVat>>(iter: I) -> Self {
        iter.fold(MoneyWithVat::ZERO, |acc, x| acc + x)
    }
}
