//! Upstream provider adapters.
//!
//! Each adapter owns one provider's URL layout, credential placement, and
//! payload shape, and maps every failure into a [`crate::QuoteError`] at its
//! own edge.

mod coinmarketcap;
mod exchange_rates;
#[cfg(test)]
mod test_support;

pub use coinmarketcap::CoinMarketCapAdapter;
pub use exchange_rates::ExchangeRatesAdapter;
