use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

/// Writes a currency map with every value as a bare JSON number, digits intact.
pub(crate) fn serialize_exact_map<S>(
    map: &BTreeMap<String, Decimal>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(map.iter().map(|(code, value)| (code, ExactNumber(value))))
}

struct ExactNumber<'a>(&'a Decimal);

impl Serialize for ExactNumber<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        rust_decimal::serde::arbitrary_precision::serialize(self.0, serializer)
    }
}
