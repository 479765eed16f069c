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

//! Money error definitions.

use decimal_rs::{DecimalConvertError, DecimalParseError};
use thiserror::Error;

/// An error which can be returned when an input cannot be turned into a money value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The input is not a decimal number.
    #[error("invalid number: {0}")]
    InvalidNumber(#[from] DecimalParseError),
    /// The input is a NaN or infinite float.
    #[error("number is not finite")]
    NonFinite,
    /// The input is not a three letter currency code.
    #[error("invalid currency code `{0}`")]
    InvalidCurrency(String),
    /// The value does not fit into a fixed precision field.
    #[error("value does not fit into {max_digits} digits with {decimal_places} decimal places")]
    TooManyDigits {
        /// Total number of significant digits.
        max_digits: u8,
        /// Number of fractional digits.
        decimal_places: u8,
    },
    /// An operation needing at least one operand got none.
    #[error("at least one operand is required")]
    NoOperands,
}

/// An error which can be returned by money arithmetic and encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Malformed input.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Division by a zero amount, zero VAT component or zero scalar.
    #[error("division by zero")]
    DivisionByZero,
    /// The operand combination is not defined.
    #[error("unsupported operand types for {op}: `{lhs}` and `{rhs}`")]
    UnsupportedOperation {
        /// Operator symbol.
        op: &'static str,
        /// Kind of the left operand.
        lhs: &'static str,
        /// Kind of the right operand.
        rhs: &'static str,
    },
    /// The result overflows the decimal format.
    #[error("value overflows money format")]
    Overflow,
}

impl From<DecimalParseError> for MoneyError {
    #[inline]
    fn from(e: DecimalParseError) -> Self {
        MoneyError::Validation(ValidationError::InvalidNumber(e))
    }
}

impl From<DecimalConvertError> for MoneyError {
    #[inline]
    fn from(e: DecimalConvertError) -> Self {
        match e {
            DecimalConvertError::Invalid => MoneyError::Validation(ValidationError::NonFinite),
            DecimalConvertError::Overflow => MoneyError::Overflow,
        }
    }
}

/// The cause of an [`InvalidJsonStructure`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JsonStructureCause {
    /// A required key is missing.
    #[error("missing key `{0}`")]
    MissingKey(&'static str),
    /// The value at the given key is not an object.
    #[error("expected an object at `{0}`")]
    NotAnObject(&'static str),
    /// The amount cannot be mapped to a decimal.
    #[error("cannot map `{key}` to a decimal")]
    InvalidAmount {
        /// Key of the offending amount.
        key: &'static str,
        /// Underlying conversion error.
        #[source]
        source: MoneyError,
    },
}

/// Returned by `MoneyWithVat::from_json` when the payload does not have the
/// `{"amount_with_vat": {"net": {"amount": ..}, "gross": {"amount": ..}}}` shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot create MoneyWithVat from given json")]
pub struct InvalidJsonStructure {
    #[source]
    cause: JsonStructureCause,
}

impl InvalidJsonStructure {
    #[inline]
    pub(crate) const fn new(cause: JsonStructureCause) -> Self {
        InvalidJsonStructure { cause }
    }

    /// Returns the underlying cause.
    #[inline]
    pub const fn cause(&self) -> &JsonStructureCause {
        &self.cause
    }
}

impl From<JsonStructureCause> for InvalidJsonStructure {
    #[inline]
    fn from(cause: JsonStructureCause) -> Self {
        InvalidJsonStructure::new(cause)
    }
}
