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

//! Parsing money amounts from text.

use crate::error::{MoneyError, ValidationError};
use crate::format::Buf;
use crate::money::Money;
use decimal_rs::Decimal;
use std::convert::TryFrom;
use std::str::FromStr;

/// Parses a string slice into a money amount.
///
/// Leading and trailing whitespace is ignored and exponent notation is accepted.
#[inline]
fn from_str(s: &str) -> Result<Money, MoneyError> {
    let amount = s.parse::<Decimal>()?;
    Ok(Money::new(amount))
}

/// Converts a float through its shortest round-trip text, so `0.1` becomes exactly `0.1`
/// instead of the nearest binary fraction.
pub(crate) fn parse_float<F: std::fmt::LowerExp>(val: F, finite: bool) -> Result<Decimal, MoneyError> {
    use std::fmt::Write;

    if !finite {
        return Err(ValidationError::NonFinite.into());
    }

    let mut buf = Buf::new();
    write!(&mut buf, "{:e}", val).map_err(|_| MoneyError::Overflow)?;
    let text = std::str::from_utf8(buf.as_slice()).map_err(|_| MoneyError::Overflow)?;
    Ok(text.parse::<Decimal>()?)
}

impl FromStr for Money {
    type Err = MoneyError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_str(s)
    }
}

impl TryFrom<&str> for Money {
    type Error = MoneyError;

    #[inline]
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        from_str(s)
    }
}
