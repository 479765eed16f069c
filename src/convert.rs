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

//! Conversion between `Money` and primitive number types.

use crate::error::MoneyError;
use crate::money::Money;
use crate::money_with_vat::MoneyWithVat;
use crate::parse::parse_float;
use decimal_rs::Decimal;
use std::convert::TryFrom;

macro_rules! impl_from_int {
    ($ty: ty) => {
        impl From<$ty> for Money {
            #[inline]
            fn from(val: $ty) -> Self {
                Money::new(Decimal::from(val))
            }
        }
    };
    ($($ty: ty), * $(,)?) => {
        $(impl_from_int!($ty);)*
    };
}

impl_from_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl From<Decimal> for Money {
    #[inline]
    fn from(amount: Decimal) -> Self {
        Money::new(amount)
    }
}

impl From<&Decimal> for Money {
    #[inline]
    fn from(amount: &Decimal) -> Self {
        Money::new(*amount)
    }
}

impl From<Money> for Decimal {
    #[inline]
    fn from(money: Money) -> Self {
        money.amount()
    }
}

impl TryFrom<i128> for Money {
    type Error = MoneyError;

    #[inline]
    fn try_from(val: i128) -> Result<Self, Self::Error> {
        Ok(Money::new(Decimal::try_from(val)?))
    }
}

impl TryFrom<u128> for Money {
    type Error = MoneyError;

    #[inline]
    fn try_from(val: u128) -> Result<Self, Self::Error> {
        Ok(Money::new(Decimal::try_from(val)?))
    }
}

impl TryFrom<f32> for Money {
    type Error = MoneyError;

    #[inline]
    fn try_from(val: f32) -> Result<Self, Self::Error> {
        parse_float(val, val.is_finite()).map(Money::new)
    }
}

impl TryFrom<f64> for Money {
    type Error = MoneyError;

    #[inline]
    fn try_from(val: f64) -> Result<Self, Self::Error> {
        parse_float(val, val.is_finite()).map(Money::new)
    }
}

impl From<&MoneyWithVat> for Option<MoneyWithVat> {
    #[inline]
    fn from(val: &MoneyWithVat) -> Self {
        Some(*val)
    }
}

impl From<&Money> for Option<Money> {
    #[inline]
    fn from(val: &Money) -> Self {
        Some(*val)
    }
}
