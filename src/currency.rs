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

//! Currency labels.
//!
//! Money amounts never carry a currency. The label is only attached when a value leaves the
//! arithmetic core, e.g. for the public API projection, and is resolved from an explicit
//! [`CurrencyContext`] supplied by the caller.

use crate::error::ValidationError;
use std::fmt;
use std::str::FromStr;

/// ISO 4217 currency code.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Currency {
    code: [u8; 3],
}

impl Currency {
    pub const EUR: Currency = Currency { code: *b"EUR" };
    pub const USD: Currency = Currency { code: *b"USD" };
    pub const GBP: Currency = Currency { code: *b"GBP" };
    pub const CHF: Currency = Currency { code: *b"CHF" };
    pub const DKK: Currency = Currency { code: *b"DKK" };
    pub const HUF: Currency = Currency { code: *b"HUF" };
    pub const NOK: Currency = Currency { code: *b"NOK" };
    pub const PLN: Currency = Currency { code: *b"PLN" };
    pub const RON: Currency = Currency { code: *b"RON" };
    pub const SEK: Currency = Currency { code: *b"SEK" };

    /// Creates a currency from a three letter upper case code.
    pub fn new(code: &str) -> Result<Currency, ValidationError> {
        let bytes = code.as_bytes();
        if bytes.len() != 3 || !bytes.iter().all(u8::is_ascii_uppercase) {
            return Err(ValidationError::InvalidCurrency(code.to_owned()));
        }

        let mut buf = [0; 3];
        buf.copy_from_slice(bytes);
        Ok(Currency { code: buf })
    }

    /// Returns the currency code.
    #[inline]
    pub fn code(&self) -> &str {
        // Only ASCII upper case letters get in.
        std::str::from_utf8(&self.code).unwrap_or("XXX")
    }
}

/// Currency used when none is configured.
pub const DEFAULT_CURRENCY: Currency = Currency::EUR;

impl FromStr for Currency {
    type Err = ValidationError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::new(s)
    }
}

impl fmt::Display for Currency {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.code())
    }
}

impl fmt::Debug for Currency {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Currency({})", self.code())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Currency {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Currency {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        let code = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Currency::new(&code).map_err(serde::de::Error::custom)
    }
}

/// The currency of the account a computation runs for.
///
/// Passed explicitly to every entry point that needs a currency label.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CurrencyContext {
    current: Option<Currency>,
}

impl CurrencyContext {
    /// A context with a configured currency.
    #[inline]
    pub const fn new(currency: Currency) -> CurrencyContext {
        CurrencyContext {
            current: Some(currency),
        }
    }

    /// A context without a configured currency.
    #[inline]
    pub const fn unset() -> CurrencyContext {
        CurrencyContext { current: None }
    }

    /// Returns the configured currency, if any.
    #[inline]
    pub const fn current(&self) -> Option<Currency> {
        self.current
    }

    /// Returns the configured currency, falling back to [`DEFAULT_CURRENCY`].
    ///
    /// The fallback is not an error, but it is logged since it usually means the caller
    /// forgot to set up the context.
    pub fn resolve(&self) -> Currency {
        match self.current {
            Some(currency) => currency,
            None => {
                log::warn!("currency not set, falling back to {}", DEFAULT_CURRENCY);
                DEFAULT_CURRENCY
            }
        }
    }
}

impl From<Currency> for CurrencyContext {
    #[inline]
    fn from(currency: Currency) -> Self {
        CurrencyContext::new(currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        assert_eq!(Currency::new("EUR").unwrap(), Currency::EUR);
        assert_eq!("DKK".parse::<Currency>().unwrap(), Currency::DKK);
        assert_eq!(Currency::new("JPY").unwrap().code(), "JPY");

        for invalid in &["", "EU", "EURO", "eur", "E1R", "€"] {
            assert_eq!(
                Currency::new(invalid),
                Err(ValidationError::InvalidCurrency(invalid.to_string()))
            );
        }
    }

    #[test]
    fn test_fmt() {
        assert_eq!(Currency::CHF.to_string(), "CHF");
        assert_eq!(format!("{:>5}", Currency::CHF), "  CHF");
        assert_eq!(format!("{:?}", Currency::CHF), "Currency(CHF)");
    }

    #[test]
    fn test_resolve() {
        assert_eq!(CurrencyContext::new(Currency::USD).resolve(), Currency::USD);
        assert_eq!(CurrencyContext::from(Currency::NOK).current(), Some(Currency::NOK));
        assert_eq!(CurrencyContext::unset().resolve(), DEFAULT_CURRENCY);
        assert_eq!(CurrencyContext::default().current(), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Currency::HUF).unwrap();
        assert_eq!(json, r#""HUF""#);
        let currency: Currency = serde_json::from_str(&json).unwrap();
        assert_eq!(currency, Currency::HUF);
        assert!(serde_json::from_str::<Currency>(r#""huf""#).is_err());
    }
}
