use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use crate::config::{DEFAULT_BASE_CURRENCY, DEFAULT_HTTP_TIMEOUT_MS};
use crate::data_source::PriceSource;
use crate::http_client::{HttpAuth, HttpClient, HttpRequest, HttpResponse};
use crate::{ProviderId, QuoteConfig, QuoteError, TickerSymbol};

const QUOTES_LATEST_PATH: &str = "/v1/cryptocurrency/quotes/latest";
const API_KEY_HEADER: &str = "X-CMC_PRO_API_KEY";

/// CoinMarketCap "latest quotes" client.
#[derive(Clone)]
pub struct CoinMarketCapAdapter {
    http_client: Arc<dyn HttpClient>,
    base_url: String,
    auth: HttpAuth,
    base_currency: String,
    timeout_ms: u64,
}

impl CoinMarketCapAdapter {
    pub fn new(
        http_client: Arc<dyn HttpClient>,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            auth: HttpAuth::Header {
                name: String::from(API_KEY_HEADER),
                value: api_key.into(),
            },
            base_currency: String::from(DEFAULT_BASE_CURRENCY),
            timeout_ms: DEFAULT_HTTP_TIMEOUT_MS,
        }
    }

    pub fn from_config(http_client: Arc<dyn HttpClient>, config: &QuoteConfig) -> Self {
        Self::new(
            http_client,
            &config.coinmarketcap_api_url,
            &config.coinmarketcap_api_key,
        )
        .with_base_currency(&config.base_currency)
        .with_timeout_ms(config.http_timeout_ms)
    }

    /// Currency key read from `quote.<CODE>.price`.
    pub fn with_base_currency(mut self, base_currency: impl Into<String>) -> Self {
        self.base_currency = base_currency.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    async fn fetch_price(&self, symbol: &TickerSymbol) -> Result<Decimal, QuoteError> {
        let normalized = symbol.normalized();
        let request = HttpRequest::get(format!("{}{QUOTES_LATEST_PATH}", self.base_url))
            .with_query("symbol", &normalized)
            .with_auth(&self.auth)
            .with_timeout_ms(self.timeout_ms);

        debug!(provider = %self.id(), url = %request.url, "requesting cryptocurrency quote");

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|error| QuoteError::transport(self.id(), error.message()))?;

        debug!(provider = %self.id(), status = response.status, "cryptocurrency quote received");

        self.extract_price(&response, symbol, &normalized)
    }

    fn extract_price(
        &self,
        response: &HttpResponse,
        symbol: &TickerSymbol,
        normalized: &str,
    ) -> Result<Decimal, QuoteError> {
        let payload: QuotesLatestResponse =
            serde_json::from_str(&response.body).map_err(|error| {
                if response.is_success() {
                    QuoteError::parse(self.id(), error.to_string())
                } else {
                    QuoteError::transport(
                        self.id(),
                        format!("coinmarketcap returned status {}", response.status),
                    )
                }
            })?;

        // Error envelopes carry no `data`, so they surface as not-found too.
        let entry = payload
            .data
            .and_then(|mut data| data.remove(normalized))
            .filter(|entry| !entry.is_null())
            .ok_or_else(|| QuoteError::symbol_not_found(symbol.as_str()))?;

        let asset: AssetEntry = serde_json::from_value(entry)
            .map_err(|error| QuoteError::parse(self.id(), error.to_string()))?;

        asset
            .quote
            .get(&self.base_currency)
            .and_then(|quote| quote.price)
            .ok_or_else(|| {
                QuoteError::parse(
                    self.id(),
                    format!("no {} price for {normalized}", self.base_currency),
                )
            })
    }
}

impl PriceSource for CoinMarketCapAdapter {
    fn id(&self) -> ProviderId {
        ProviderId::CoinMarketCap
    }

    fn price_in_usd<'a>(
        &'a self,
        symbol: &'a TickerSymbol,
    ) -> Pin<Box<dyn Future<Output = Result<Decimal, QuoteError>> + Send + 'a>> {
        Box::pin(self.fetch_price(symbol))
    }
}

#[derive(Debug, Deserialize)]
struct QuotesLatestResponse {
    #[serde(default)]
    data: Option<BTreeMap<String, serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
struct AssetEntry {
    #[serde(default)]
    quote: BTreeMap<String, QuoteEntry>,
}

#[derive(Debug, Deserialize)]
struct QuoteEntry {
    #[serde(default)]
    price: Option<Decimal>,
}
