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

//! serde implementation.
//!
//! Human readable formats get the canonical fixed point string of an amount and accept any
//! numeric scalar back, except floats beyond 2^53 which must be sent as strings. Binary formats
//! use the compact decimal encoding.

use crate::format::{self, Buf};
use crate::money::Money;
use crate::parse::parse_float;
use crate::precision::MONEY_FIELD_PRECISION;
use decimal_rs::Decimal;
use std::convert::TryFrom;

impl serde::Serialize for Money {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        if serializer.is_human_readable() {
            let mut buf = Buf::new();
            format::write_fixed(&self.amount(), MONEY_FIELD_PRECISION, &mut buf).map_err(serde::ser::Error::custom)?;
            let s = std::str::from_utf8(buf.as_slice()).map_err(serde::ser::Error::custom)?;
            serializer.serialize_str(s)
        } else {
            serde::Serialize::serialize(&self.amount(), serializer)
        }
    }
}

/// Largest magnitude up to which every integer is exact in an `f64`.
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

struct DecimalVisitor;

impl<'de> serde::de::Visitor<'de> for DecimalVisitor {
    type Value = Decimal;

    #[inline]
    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(formatter, "a decimal string or number")
    }

    #[inline]
    fn visit_str<E>(self, v: &str) -> Result<Decimal, E>
    where
        E: serde::de::Error,
    {
        v.parse().map_err(serde::de::Error::custom)
    }

    #[inline]
    fn visit_i64<E>(self, v: i64) -> Result<Decimal, E>
    where
        E: serde::de::Error,
    {
        Ok(Decimal::from(v))
    }

    #[inline]
    fn visit_u64<E>(self, v: u64) -> Result<Decimal, E>
    where
        E: serde::de::Error,
    {
        Ok(Decimal::from(v))
    }

    #[inline]
    fn visit_i128<E>(self, v: i128) -> Result<Decimal, E>
    where
        E: serde::de::Error,
    {
        Decimal::try_from(v).map_err(serde::de::Error::custom)
    }

    #[inline]
    fn visit_u128<E>(self, v: u128) -> Result<Decimal, E>
    where
        E: serde::de::Error,
    {
        Decimal::try_from(v).map_err(serde::de::Error::custom)
    }

    /// Large integers may arrive here rounded by the format, so floats beyond 2^53 are
    /// rejected and have to be sent as strings.
    #[inline]
    fn visit_f64<E>(self, v: f64) -> Result<Decimal, E>
    where
        E: serde::de::Error,
    {
        if v.abs() > MAX_EXACT_FLOAT {
            return Err(serde::de::Error::custom(format_args!(
                "number {} exceeds float precision, send it as a string",
                v
            )));
        }
        parse_float(v, v.is_finite()).map_err(serde::de::Error::custom)
    }
}

/// Deserializes a `Decimal` from a decimal string or any number in human readable formats,
/// or from the compact decimal encoding in binary formats.
pub(crate) fn deserialize_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: serde::de::Deserializer<'de>,
{
    if deserializer.is_human_readable() {
        deserializer.deserialize_any(DecimalVisitor)
    } else {
        <Decimal as serde::Deserialize>::deserialize(deserializer)
    }
}

impl<'de> serde::Deserialize<'de> for Money {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        deserialize_decimal(deserializer).map(Money::new)
    }
}
