//! Upstream source contracts.
//!
//! The quote pipeline talks to providers only through these two traits, so
//! the orchestrator can be driven by the HTTP-backed adapters in production
//! and by in-memory fakes in tests.
//!
//! | Trait | Produces | Production adapter |
//! |-------|----------|--------------------|
//! | [`PriceSource`] | price in base currency | [`crate::CoinMarketCapAdapter`] |
//! | [`RateSource`] | [`ExchangeRateTable`] | [`crate::ExchangeRatesAdapter`] |

use std::future::Future;
use std::pin::Pin;

use rust_decimal::Decimal;

use crate::{ExchangeRateTable, ProviderId, QuoteError, TickerSymbol};

/// Cryptocurrency price provider.
///
/// Implementations must convert every transport fault into a [`QuoteError`];
/// nothing may panic across this boundary.
pub trait PriceSource: Send + Sync {
    fn id(&self) -> ProviderId;

    /// Latest price of `symbol` in the base currency.
    ///
    /// # Errors
    ///
    /// - [`QuoteError::SymbolNotFound`] when the provider has no entry for the symbol
    /// - [`QuoteError::Transport`] on network failure
    /// - [`QuoteError::Parse`] on a malformed payload
    fn price_in_usd<'a>(
        &'a self,
        symbol: &'a TickerSymbol,
    ) -> Pin<Box<dyn Future<Output = Result<Decimal, QuoteError>> + Send + 'a>>;
}

/// Foreign-exchange rate provider.
pub trait RateSource: Send + Sync {
    fn id(&self) -> ProviderId;

    /// Full rate table relative to the base currency, unfiltered.
    ///
    /// # Errors
    ///
    /// - [`QuoteError::Transport`] on network failure
    /// - [`QuoteError::Parse`] on a malformed payload
    /// - [`QuoteError::Upstream`] when the provider reports its own error
    fn exchange_rates<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<ExchangeRateTable, QuoteError>> + Send + 'a>>;
}
