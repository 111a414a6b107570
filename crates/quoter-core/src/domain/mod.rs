//! # Domain Models
//!
//! Canonical domain types for a single quote request.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`TickerSymbol`] | Validated cryptocurrency ticker |
//! | [`ExchangeRateTable`] | Currency code to units-per-base-currency rate |
//! | [`QuoteResult`] | Currency code to converted price |
//!
//! All three live for one request only and are never mutated after
//! construction. Prices and rates are [`rust_decimal::Decimal`] so that
//! composition and JSON round trips keep every digit.

mod number;
mod quote;
mod rates;
mod symbol;

pub use quote::QuoteResult;
pub use rates::ExchangeRateTable;
pub use symbol::{TickerSymbol, MAX_SYMBOL_LEN};
