use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Converted prices keyed by target currency code.
///
/// Serializes as a flat JSON object, e.g. `{"EUR": 1400, "USD": 2000}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteResult(
    #[serde(serialize_with = "crate::domain::number::serialize_exact_map")] BTreeMap<String, Decimal>,
);

impl QuoteResult {
    pub fn get(&self, currency: &str) -> Option<Decimal> {
        self.0.get(currency).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.0.iter().map(|(code, price)| (code.as_str(), *price))
    }
}

impl<K: Into<String>> FromIterator<(K, Decimal)> for QuoteResult {
    fn from_iter<T: IntoIterator<Item = (K, Decimal)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
