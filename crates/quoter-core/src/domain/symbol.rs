use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

pub const MAX_SYMBOL_LEN: usize = 50;

const SUBJECT: &str = "Cryptocurrency symbol";

/// Cryptocurrency ticker as supplied by the caller.
///
/// The original casing is kept so error messages echo what the caller sent;
/// upstream lookups go through [`TickerSymbol::normalized`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TickerSymbol(String);

impl TickerSymbol {
    /// Check every rule and report all violations together.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let mut violations = Vec::new();

        if input.is_empty() {
            violations.push(format!("{SUBJECT} is required."));
        }

        if input.chars().count() > MAX_SYMBOL_LEN {
            violations.push(format!(
                "{SUBJECT} must be less than {MAX_SYMBOL_LEN} characters"
            ));
        }

        // `^[a-zA-Z0-9]+$` also rejects the empty string.
        if input.is_empty() || !input.chars().all(|ch| ch.is_ascii_alphanumeric()) {
            violations.push(format!(
                "{SUBJECT} must contain only alphanumeric characters."
            ));
        }

        if violations.is_empty() {
            Ok(Self(input.to_owned()))
        } else {
            Err(ValidationError::new(violations))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Uppercase form used as the upstream query and lookup key.
    pub fn normalized(&self) -> String {
        self.0.to_ascii_uppercase()
    }
}

impl Display for TickerSymbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for TickerSymbol {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for TickerSymbol {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<TickerSymbol> for String {
    fn from(value: TickerSymbol) -> Self {
        value.0
    }
}
