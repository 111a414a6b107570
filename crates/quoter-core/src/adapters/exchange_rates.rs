use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use crate::config::DEFAULT_HTTP_TIMEOUT_MS;
use crate::data_source::RateSource;
use crate::http_client::{HttpAuth, HttpClient, HttpRequest, HttpResponse};
use crate::{ExchangeRateTable, ProviderId, QuoteConfig, QuoteError};

const LATEST_PATH: &str = "/latest";
const ACCESS_KEY_PARAM: &str = "access_key";

/// exchangeratesapi "latest rates" client.
#[derive(Clone)]
pub struct ExchangeRatesAdapter {
    http_client: Arc<dyn HttpClient>,
    base_url: String,
    auth: HttpAuth,
    timeout_ms: u64,
}

impl ExchangeRatesAdapter {
    pub fn new(
        http_client: Arc<dyn HttpClient>,
        base_url: impl Into<String>,
        access_key: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            auth: HttpAuth::QueryParam {
                name: String::from(ACCESS_KEY_PARAM),
                value: access_key.into(),
            },
            timeout_ms: DEFAULT_HTTP_TIMEOUT_MS,
        }
    }

    pub fn from_config(http_client: Arc<dyn HttpClient>, config: &QuoteConfig) -> Self {
        Self::new(
            http_client,
            &config.exchange_rates_api_url,
            &config.exchange_rates_api_key,
        )
        .with_timeout_ms(config.http_timeout_ms)
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    async fn fetch_rates(&self) -> Result<ExchangeRateTable, QuoteError> {
        let request = HttpRequest::get(format!("{}{LATEST_PATH}", self.base_url))
            .with_auth(&self.auth)
            .with_timeout_ms(self.timeout_ms);

        debug!(
            provider = %self.id(),
            url = %request.redacted_url(&[ACCESS_KEY_PARAM]),
            "requesting exchange rates"
        );

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|error| QuoteError::transport(self.id(), error.message()))?;

        debug!(provider = %self.id(), status = response.status, "exchange rates received");

        self.extract_rates(&response)
    }

    fn extract_rates(&self, response: &HttpResponse) -> Result<ExchangeRateTable, QuoteError> {
        let payload: LatestRatesResponse =
            serde_json::from_str(&response.body).map_err(|error| {
                if response.is_success() {
                    QuoteError::parse(self.id(), error.to_string())
                } else {
                    QuoteError::transport(
                        self.id(),
                        format!("exchange rates provider returned status {}", response.status),
                    )
                }
            })?;

        if let Some(rates) = payload.rates {
            return Ok(ExchangeRateTable::new(rates));
        }

        if let Some(message) = payload.error.and_then(ProviderError::into_message) {
            return Err(QuoteError::upstream(self.id(), message));
        }

        if !response.is_success() {
            return Err(QuoteError::transport(
                self.id(),
                format!("exchange rates provider returned status {}", response.status),
            ));
        }

        Err(QuoteError::parse(
            self.id(),
            "exchange rates response is missing 'rates'",
        ))
    }
}

impl RateSource for ExchangeRatesAdapter {
    fn id(&self) -> ProviderId {
        ProviderId::ExchangeRates
    }

    fn exchange_rates<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<ExchangeRateTable, QuoteError>> + Send + 'a>> {
        Box::pin(self.fetch_rates())
    }
}

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    #[serde(default)]
    rates: Option<BTreeMap<String, Decimal>>,
    #[serde(default)]
    error: Option<ProviderError>,
}

/// `{"success": false, "error": {"code": 101, "type": "...", "info": "..."}}`
#[derive(Debug, Deserialize)]
struct ProviderError {
    #[serde(default)]
    info: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
}

impl ProviderError {
    fn into_message(self) -> Option<String> {
        self.info.or(self.kind)
    }
}
