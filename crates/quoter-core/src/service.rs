//! Quote orchestration.
//!
//! [`QuoteService::get_quotes`] runs validate → price → rates → compose.
//! Each stage runs only when every earlier stage succeeded, so a failed
//! validation never reaches the network and a failed price lookup never
//! reaches the rates provider.

use std::collections::BTreeSet;
use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::adapters::{CoinMarketCapAdapter, ExchangeRatesAdapter};
use crate::data_source::{PriceSource, RateSource};
use crate::http_client::{HttpClient, ReqwestHttpClient};
use crate::validation::{SymbolValidator, TickerValidator};
use crate::{ExchangeRateTable, QuoteConfig, QuoteError, QuoteResult};

#[derive(Clone)]
pub struct QuoteService {
    validator: Arc<dyn SymbolValidator>,
    prices: Arc<dyn PriceSource>,
    rates: Arc<dyn RateSource>,
    target_currencies: BTreeSet<String>,
}

impl QuoteService {
    pub fn new<I, S>(
        validator: Arc<dyn SymbolValidator>,
        prices: Arc<dyn PriceSource>,
        rates: Arc<dyn RateSource>,
        target_currencies: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            validator,
            prices,
            rates,
            target_currencies: target_currencies.into_iter().map(Into::into).collect(),
        }
    }

    /// Production wiring: default validator and reqwest-backed adapters.
    pub fn from_config(config: &QuoteConfig) -> Self {
        Self::with_http_client(Arc::new(ReqwestHttpClient::new()), config)
    }

    /// Production adapters over a caller-supplied transport.
    pub fn with_http_client(http_client: Arc<dyn HttpClient>, config: &QuoteConfig) -> Self {
        Self::new(
            Arc::new(TickerValidator),
            Arc::new(CoinMarketCapAdapter::from_config(
                Arc::clone(&http_client),
                config,
            )),
            Arc::new(ExchangeRatesAdapter::from_config(http_client, config)),
            config.target_currencies.iter().cloned(),
        )
    }

    pub fn target_currencies(&self) -> &BTreeSet<String> {
        &self.target_currencies
    }

    /// Price of `symbol` in every configured target currency.
    pub async fn get_quotes(&self, symbol: &str) -> Result<QuoteResult, QuoteError> {
        let ticker = self.validator.validate(symbol)?;
        let price = self.prices.price_in_usd(&ticker).await?;
        let rates = self.rates.exchange_rates().await?;

        debug!(
            symbol = %ticker,
            %price,
            rate_count = rates.len(),
            "composing quote"
        );

        self.compose(price, &rates)
    }

    fn compose(&self, price: Decimal, rates: &ExchangeRateTable) -> Result<QuoteResult, QuoteError> {
        let mut result = Vec::with_capacity(self.target_currencies.len());
        for currency in &self.target_currencies {
            let Some(rate) = rates.rate(currency) else {
                warn!(
                    currency = %currency,
                    provider = %self.rates.id(),
                    "no exchange rate for target currency; skipping"
                );
                continue;
            };
            let converted = price.checked_mul(rate).ok_or_else(|| {
                QuoteError::parse(
                    self.rates.id(),
                    format!("price {price} x rate {rate} for {currency} overflows"),
                )
            })?;
            result.push((currency.as_str(), converted));
        }
        Ok(result.into_iter().collect())
    }
}
