use crate::{TickerSymbol, ValidationError};

/// Syntactic ticker check run before any upstream call.
pub trait SymbolValidator: Send + Sync {
    fn validate(&self, symbol: &str) -> Result<TickerSymbol, ValidationError>;
}

/// Default rules: required, at most 50 characters, ASCII alphanumeric only.
#[derive(Debug, Default, Clone, Copy)]
pub struct TickerValidator;

impl SymbolValidator for TickerValidator {
    fn validate(&self, symbol: &str) -> Result<TickerSymbol, ValidationError> {
        TickerSymbol::parse(symbol)
    }
}
