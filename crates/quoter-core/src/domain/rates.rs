use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Exchange rates keyed by currency code, in units per one base currency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExchangeRateTable(
    #[serde(serialize_with = "crate::domain::number::serialize_exact_map")] BTreeMap<String, Decimal>,
);

impl ExchangeRateTable {
    pub fn new(rates: BTreeMap<String, Decimal>) -> Self {
        Self(rates)
    }

    pub fn rate(&self, currency: &str) -> Option<Decimal> {
        self.0.get(currency).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Decimal)> for ExchangeRateTable {
    fn from_iter<T: IntoIterator<Item = (K, Decimal)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
