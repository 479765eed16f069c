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

//! Null skipping batch sums.

use crate::money::Money;
use decimal_rs::Decimal;

/// Sums the present amounts of `elems`.
///
/// Returns [`Money::ZERO`] rather than `None` for an empty input, use
/// [`MoneyWithVat::fast_sum_with_none`](crate::MoneyWithVat::fast_sum_with_none) to tell the
/// two apart.
///
/// ```
/// use money_rs::{sum, Money};
///
/// let total = sum(vec![Some(Money::from(100)), Some(Money::from(200)), Some(Money::ZERO), None]);
/// assert_eq!(total, Money::from(300));
/// assert_eq!(sum(Vec::<Money>::new()), Money::ZERO);
/// ```
pub fn sum<I>(elems: I) -> Money
where
    I: IntoIterator,
    I::Item: Into<Option<Money>>,
{
    let amount = elems
        .into_iter()
        .filter_map(Into::<Option<Money>>::into)
        .fold(Decimal::ZERO, |acc, m| acc + m.amount());
    Money::new(amount)
}
