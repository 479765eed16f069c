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

//! Rounding and fixed precision helpers.

use crate::error::{MoneyError, ValidationError};
use decimal_rs::Decimal;
use std::cmp::Ordering;

/// Scale used for cents rounding.
pub const CENTS_SCALE: i16 = 2;

// Scale range of `Decimal`, rounding beyond it is a no-op.
const MIN_ROUND_SCALE: i16 = -126;
const MAX_ROUND_SCALE: i16 = 130;

/// Precision of a fixed point storage column: `max_digits` significant digits,
/// `decimal_places` of them after the decimal point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldPrecision {
    /// Total number of significant digits.
    pub max_digits: u8,
    /// Number of fractional digits.
    pub decimal_places: u8,
}

/// Precision of persisted money amounts.
pub const MONEY_FIELD_PRECISION: FieldPrecision = FieldPrecision::new(28, 12);

/// Precision of persisted plain decimals, e.g. ratios.
pub const DECIMAL_FIELD_PRECISION: FieldPrecision = FieldPrecision::new(32, 16);

impl FieldPrecision {
    /// Creates a field precision.
    #[inline]
    pub const fn new(max_digits: u8, decimal_places: u8) -> FieldPrecision {
        FieldPrecision {
            max_digits,
            decimal_places,
        }
    }

    /// Number of digits allowed before the decimal point.
    #[inline]
    pub const fn integer_digits(&self) -> u8 {
        self.max_digits.saturating_sub(self.decimal_places)
    }

    /// Rounds `value` half-even to `decimal_places` and checks that the result fits.
    pub fn quantize(&self, value: &Decimal) -> Result<Decimal, MoneyError> {
        let rounded = round_half_even(value, self.decimal_places as i16);
        if integer_digits(&rounded) > self.integer_digits() as i16 {
            return Err(ValidationError::TooManyDigits {
                max_digits: self.max_digits,
                decimal_places: self.decimal_places,
            }
            .into());
        }
        Ok(rounded)
    }
}

/// Count of digits before the decimal point, zero for `|value| < 1`.
#[inline]
fn integer_digits(value: &Decimal) -> i16 {
    if value.is_zero() {
        return 0;
    }
    (value.precision() as i16 - value.scale()).max(0)
}

/// `10^-scale`.
#[inline]
fn unit(scale: i16) -> Decimal {
    Decimal::from_parts(1, scale, false).unwrap_or(Decimal::ONE)
}

/// Rounds `value` to `scale` fractional digits, ties to even.
///
/// A negative `scale` rounds before the decimal point, e.g. `round_half_even(1234.5, -2) == 1200`.
/// `scale` is clamped to the `[-126, 130]` range `Decimal` supports.
pub fn round_half_even(value: &Decimal, scale: i16) -> Decimal {
    let scale = scale.max(MIN_ROUND_SCALE).min(MAX_ROUND_SCALE);
    if value.is_zero() || value.scale() <= scale {
        return *value;
    }

    let truncated = value.trunc(scale);
    let remainder = (*value - truncated).abs();
    let half = Decimal::from_parts(5, scale + 1, false).unwrap_or(Decimal::ZERO);

    let away_from_zero = match remainder.cmp(&half) {
        Ordering::Less => false,
        Ordering::Greater => true,
        Ordering::Equal => is_odd_at(&truncated, scale),
    };

    if !away_from_zero {
        truncated
    } else if value.is_sign_negative() {
        truncated - unit(scale)
    } else {
        truncated + unit(scale)
    }
}

/// Whether the digit at the last kept position of `truncated` is odd.
#[inline]
fn is_odd_at(truncated: &Decimal, scale: i16) -> bool {
    let units = match truncated.checked_div(unit(scale)) {
        Some(units) => units,
        None => return false,
    };
    match units.checked_rem(Decimal::from(2)) {
        Some(rem) => !rem.is_zero(),
        None => false,
    }
}
