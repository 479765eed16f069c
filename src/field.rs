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

//! Persistence field mappers.
//!
//! Storage keeps plain fixed precision decimals. The mappers turn them into value types on
//! read and back on write, without caching anything per record.

use crate::error::MoneyError;
use crate::money::Money;
use crate::money_with_vat::MoneyWithVat;
use crate::precision::{FieldPrecision, MONEY_FIELD_PRECISION};
use decimal_rs::Decimal;
use std::fmt;

/// Maps a nullable decimal column to [`Money`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoneyField {
    precision: FieldPrecision,
}

impl MoneyField {
    /// Creates a mapper for a column of the given precision.
    #[inline]
    pub const fn new(precision: FieldPrecision) -> MoneyField {
        MoneyField { precision }
    }

    #[inline]
    pub const fn precision(&self) -> FieldPrecision {
        self.precision
    }

    /// Quantizes `value` to the column precision.
    ///
    /// Fails with [`ValidationError::TooManyDigits`](crate::ValidationError::TooManyDigits)
    /// if the integer part does not fit.
    #[inline]
    pub fn to_db(&self, value: Option<&Money>) -> Result<Option<Decimal>, MoneyError> {
        value.map(|m| self.precision.quantize(&m.amount())).transpose()
    }

    #[inline]
    pub fn from_db(&self, value: Option<Decimal>) -> Option<Money> {
        value.map(Money::new)
    }
}

impl Default for MoneyField {
    #[inline]
    fn default() -> Self {
        MoneyField::new(MONEY_FIELD_PRECISION)
    }
}

/// Stored values of a net and a tax column.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MoneyWithVatColumns {
    pub net: Option<Decimal>,
    pub tax: Option<Decimal>,
}

impl MoneyWithVatColumns {
    #[inline]
    pub const fn new(net: Option<Decimal>, tax: Option<Decimal>) -> MoneyWithVatColumns {
        MoneyWithVatColumns { net, tax }
    }
}

/// Maps a pair of net and tax columns to [`MoneyWithVat`], reading missing columns as zero
/// and writing zeros for `None`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoneyWithVatField {
    net_column: &'static str,
    tax_column: &'static str,
    column: MoneyField,
}

impl MoneyWithVatField {
    #[inline]
    pub const fn new(net_column: &'static str, tax_column: &'static str) -> MoneyWithVatField {
        MoneyWithVatField {
            net_column,
            tax_column,
            column: MoneyField::new(MONEY_FIELD_PRECISION),
        }
    }

    /// Uses `precision` for both columns instead of the default money precision.
    #[inline]
    pub const fn with_precision(mut self, precision: FieldPrecision) -> MoneyWithVatField {
        self.column = MoneyField::new(precision);
        self
    }

    #[inline]
    pub const fn net_column(&self) -> &'static str {
        self.net_column
    }

    #[inline]
    pub const fn tax_column(&self) -> &'static str {
        self.tax_column
    }

    pub fn to_db(&self, value: Option<&MoneyWithVat>) -> Result<MoneyWithVatColumns, MoneyError> {
        let value = value.copied().unwrap_or(MoneyWithVat::ZERO);
        write_columns(&self.column, &value)
    }

    #[inline]
    pub fn from_db(&self, columns: MoneyWithVatColumns) -> MoneyWithVat {
        MoneyWithVat::from_parts(self.column.from_db(columns.net), self.column.from_db(columns.tax))
    }
}

impl fmt::Display for MoneyWithVatField {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "MoneyWithVatField({}, {})", self.net_column, self.tax_column)
    }
}

/// Like [`MoneyWithVatField`], but reads `None` when both columns are null and writes nulls
/// for `None`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NullableMoneyWithVatField {
    inner: MoneyWithVatField,
}

impl NullableMoneyWithVatField {
    #[inline]
    pub const fn new(net_column: &'static str, tax_column: &'static str) -> NullableMoneyWithVatField {
        NullableMoneyWithVatField {
            inner: MoneyWithVatField::new(net_column, tax_column),
        }
    }

    #[inline]
    pub const fn with_precision(self, precision: FieldPrecision) -> NullableMoneyWithVatField {
        NullableMoneyWithVatField {
            inner: self.inner.with_precision(precision),
        }
    }

    pub fn to_db(&self, value: Option<&MoneyWithVat>) -> Result<MoneyWithVatColumns, MoneyError> {
        match value {
            Some(value) => write_columns(&self.inner.column, value),
            None => Ok(MoneyWithVatColumns::default()),
        }
    }

    #[inline]
    pub fn from_db(&self, columns: MoneyWithVatColumns) -> Option<MoneyWithVat> {
        if columns.net.is_none() && columns.tax.is_none() {
            return None;
        }
        Some(self.inner.from_db(columns))
    }
}

impl fmt::Display for NullableMoneyWithVatField {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "NullableMoneyWithVatField({}, {})",
            self.inner.net_column, self.inner.tax_column
        )
    }
}

#[inline]
fn write_columns(column: &MoneyField, value: &MoneyWithVat) -> Result<MoneyWithVatColumns, MoneyError> {
    Ok(MoneyWithVatColumns {
        net: column.to_db(Some(&value.net()))?,
        tax: column.to_db(Some(&value.tax()))?,
    })
}
