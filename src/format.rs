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

//! Fixed point formatting and the presentation seams.

use crate::currency::Currency;
use crate::error::MoneyError;
use crate::precision::FieldPrecision;
use decimal_rs::Decimal;
use stack_buf::StackVec;
use std::fmt;

/// Stack buffer large enough for any canonical money string.
pub(crate) type Buf = StackVec<u8, 64>;

const ZERO_BUF: &str = "0000000000000000000000000000000000000000";

/// Locale aware money formatting lives outside this crate; it only gets the amount and the
/// currency code.
pub trait MoneyFormatter {
    /// Formats `amount` in `currency`, using `locale` instead of the ambient one if given.
    fn format(&self, amount: &Decimal, currency: Currency, locale: Option<&str>) -> String;
}

/// Public API projection of a money amount.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PublicMoney {
    /// Canonical amount string.
    pub amount: String,
    /// Currency code.
    pub currency: Currency,
}

/// Public API projection of a net/tax pair.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PublicMoneyWithVat {
    /// Canonical net amount string.
    pub net: String,
    /// Canonical tax amount string.
    pub tax: String,
    /// Currency code.
    pub currency: Currency,
}

/// Writes `value` quantized to `precision` as a fixed point string with exactly
/// `decimal_places` fractional digits.
pub(crate) fn write_fixed<W: fmt::Write>(
    value: &Decimal,
    precision: FieldPrecision,
    w: W,
) -> Result<(), MoneyError> {
    let quantized = precision.quantize(value)?;
    fmt_fixed(&quantized, precision.decimal_places as usize, w).map_err(|_| MoneyError::Overflow)
}

#[inline]
fn write_zeros<W: fmt::Write>(w: &mut W, mut count: usize) -> fmt::Result {
    while count > 0 {
        let n = count.min(ZERO_BUF.len());
        w.write_str(&ZERO_BUF[..n])?;
        count -= n;
    }
    Ok(())
}

/// `dec` must not have more than `places` fractional digits.
fn fmt_fixed<W: fmt::Write>(dec: &Decimal, places: usize, mut w: W) -> fmt::Result {
    use std::fmt::Write;

    let (int_val, scale, negative) = dec.into_parts();

    if int_val != 0 && negative {
        w.write_char('-')?;
    }

    if scale <= 0 {
        write!(w, "{}", int_val)?;
        if int_val != 0 {
            write_zeros(&mut w, -scale as usize)?;
        }
        if places > 0 {
            w.write_char('.')?;
            write_zeros(&mut w, places)?;
        }
        return Ok(());
    }

    let scale = scale as usize;
    debug_assert!(scale <= places);

    let mut buf = StackVec::<u8, 40>::new();
    write!(&mut buf, "{}", int_val)?;
    let digits = std::str::from_utf8(buf.as_slice()).map_err(|_| fmt::Error)?;

    if digits.len() <= scale {
        w.write_str("0.")?;
        write_zeros(&mut w, scale - digits.len())?;
        w.write_str(digits)?;
    } else {
        let (int_digits, frac_digits) = digits.split_at(digits.len() - scale);
        w.write_str(int_digits)?;
        w.write_char('.')?;
        w.write_str(frac_digits)?;
    }
    write_zeros(&mut w, places - scale)
}
