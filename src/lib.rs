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

//! Exact decimal money amounts with VAT splitting.
//!
//! ## Optional features
//!
//! ### `serde`
//!
//! Enabled by default. `Money`, `MoneyWithVat` and `MoneyWithVatRatio` implement the
//! `serde::Serialize` and `serde::Deserialize` traits, and `MoneyWithVat::from_json` is
//! available.
//!
//! ## Usage
//!
//! To build a money amount, use [`Money`]:
//!
//! ```
//! use money_rs::Money;
//!
//! let m1: Money = "19.99".parse().unwrap();
//! let m2 = Money::from(5);
//! let result = m1 + m2;
//! assert_eq!(result.to_string(), "24.99");
//! assert_eq!(result.canonical_string().unwrap(), "24.990000000000");
//! ```
//!
//! Rounding is half-even:
//!
//! ```
//! use money_rs::Money;
//!
//! let m: Money = "2.345".parse().unwrap();
//! assert_eq!(m.round(2), "2.34".parse().unwrap());
//! ```
//!
//! A net amount and its VAT form a [`MoneyWithVat`]:
//!
//! ```
//! use money_rs::{Money, MoneyWithVat};
//! use decimal_rs::Decimal;
//!
//! let m = MoneyWithVat::new(100, 19);
//! assert_eq!(m.gross(), Money::from(119));
//! assert_eq!(m.tax_rate(), "0.19".parse::<Decimal>().unwrap());
//!
//! let n = MoneyWithVat::new(200, 14);
//! let ratio = MoneyWithVat::ratio(&m, &n).unwrap();
//! assert_eq!((ratio * n).rounded_to_cents(), m.rounded_to_cents());
//! ```
//!
//! Batch sums skip missing values:
//!
//! ```
//! use money_rs::MoneyWithVat;
//!
//! let items = vec![Some(MoneyWithVat::new(1, 1)), None, Some(MoneyWithVat::new(2, 2))];
//! assert_eq!(MoneyWithVat::fast_sum(items), MoneyWithVat::new(3, 3));
//! assert_eq!(MoneyWithVat::fast_sum_with_none(vec![None::<MoneyWithVat>]), None);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

mod convert;
mod currency;
mod error;
mod field;
mod format;
mod money;
mod money_with_vat;
mod operand;
mod ops;
mod parse;
mod precision;
mod ratio;
mod sum;

#[cfg(feature = "serde")]
mod serde;

pub use crate::currency::{Currency, CurrencyContext, DEFAULT_CURRENCY};
pub use crate::error::{InvalidJsonStructure, JsonStructureCause, MoneyError, ValidationError};
pub use crate::field::{MoneyField, MoneyWithVatColumns, MoneyWithVatField, NullableMoneyWithVatField};
pub use crate::format::{MoneyFormatter, PublicMoney, PublicMoneyWithVat};
pub use crate::money::Money;
pub use crate::money_with_vat::{MoneyWithVat, VatFactor, GERMAN_VAT_RATES, KNOWN_VAT_RATES};
pub use crate::operand::Operand;
pub use crate::precision::{
    round_half_even, FieldPrecision, CENTS_SCALE, DECIMAL_FIELD_PRECISION, MONEY_FIELD_PRECISION,
};
pub use crate::ratio::MoneyWithVatRatio;
pub use crate::sum::sum;
