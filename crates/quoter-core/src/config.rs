//! Process-wide configuration.
//!
//! Loaded once at startup and shared read-only afterwards.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `COINMARKETCAP_API_KEY` | required |
//! | `COINMARKETCAP_API_URL` | `https://pro-api.coinmarketcap.com` |
//! | `EXCHANGERATESAPI_API_KEY` | required |
//! | `EXCHANGERATESAPI_URL` | `http://api.exchangeratesapi.io/v1` |
//! | `BASE_CURRENCY` | `USD` |
//! | `TARGET_CURRENCIES` | `USD,EUR,BRL,GBP,AUD` |
//! | `CACHE_SLIDING_EXPIRATION_MINUTES` | `0` |
//! | `QUOTER_HTTP_TIMEOUT_MS` | `5000` |

use std::collections::BTreeSet;
use std::fmt::{Debug, Formatter};

use crate::ConfigError;

pub const DEFAULT_COINMARKETCAP_URL: &str = "https://pro-api.coinmarketcap.com";
pub const DEFAULT_EXCHANGE_RATES_URL: &str = "http://api.exchangeratesapi.io/v1";
pub const DEFAULT_BASE_CURRENCY: &str = "USD";
pub const DEFAULT_TARGET_CURRENCIES: [&str; 5] = ["USD", "EUR", "BRL", "GBP", "AUD"];
pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 5_000;

#[derive(Clone, PartialEq, Eq)]
pub struct QuoteConfig {
    pub coinmarketcap_api_url: String,
    pub coinmarketcap_api_key: String,
    pub exchange_rates_api_url: String,
    pub exchange_rates_api_key: String,
    pub base_currency: String,
    pub target_currencies: BTreeSet<String>,
    /// Reserved; no response caching is performed.
    pub cache_sliding_expiration_minutes: u32,
    pub http_timeout_ms: u64,
}

impl QuoteConfig {
    /// Load from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &'static str| lookup(name).filter(|value| !value.trim().is_empty());
        let required = |name: &'static str| var(name).ok_or(ConfigError::Missing { name });

        let base_currency = match var("BASE_CURRENCY") {
            Some(value) => parse_currency("BASE_CURRENCY", &value)?,
            None => String::from(DEFAULT_BASE_CURRENCY),
        };

        let target_currencies = match var("TARGET_CURRENCIES") {
            Some(value) => parse_currency_list("TARGET_CURRENCIES", &value)?,
            None => DEFAULT_TARGET_CURRENCIES
                .iter()
                .map(|code| String::from(*code))
                .collect(),
        };

        Ok(Self {
            coinmarketcap_api_url: trim_url(
                var("COINMARKETCAP_API_URL").as_deref(),
                DEFAULT_COINMARKETCAP_URL,
            ),
            coinmarketcap_api_key: required("COINMARKETCAP_API_KEY")?,
            exchange_rates_api_url: trim_url(
                var("EXCHANGERATESAPI_URL").as_deref(),
                DEFAULT_EXCHANGE_RATES_URL,
            ),
            exchange_rates_api_key: required("EXCHANGERATESAPI_API_KEY")?,
            base_currency,
            target_currencies,
            cache_sliding_expiration_minutes: parse_number(
                "CACHE_SLIDING_EXPIRATION_MINUTES",
                var("CACHE_SLIDING_EXPIRATION_MINUTES"),
                0,
            )?,
            http_timeout_ms: parse_number(
                "QUOTER_HTTP_TIMEOUT_MS",
                var("QUOTER_HTTP_TIMEOUT_MS"),
                DEFAULT_HTTP_TIMEOUT_MS,
            )?,
        })
    }
}

impl Debug for QuoteConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuoteConfig")
            .field("coinmarketcap_api_url", &self.coinmarketcap_api_url)
            .field("coinmarketcap_api_key", &"<redacted>")
            .field("exchange_rates_api_url", &self.exchange_rates_api_url)
            .field("exchange_rates_api_key", &"<redacted>")
            .field("base_currency", &self.base_currency)
            .field("target_currencies", &self.target_currencies)
            .field(
                "cache_sliding_expiration_minutes",
                &self.cache_sliding_expiration_minutes,
            )
            .field("http_timeout_ms", &self.http_timeout_ms)
            .finish()
    }
}

fn trim_url(value: Option<&str>, default: &str) -> String {
    value.unwrap_or(default).trim().trim_end_matches('/').to_owned()
}

fn parse_currency(name: &'static str, value: &str) -> Result<String, ConfigError> {
    let code = value.trim().to_ascii_uppercase();
    if code.len() == 3 && code.chars().all(|ch| ch.is_ascii_alphabetic()) {
        Ok(code)
    } else {
        Err(ConfigError::Invalid {
            name,
            reason: format!("'{value}' is not a 3-letter currency code"),
        })
    }
}

fn parse_currency_list(name: &'static str, value: &str) -> Result<BTreeSet<String>, ConfigError> {
    let codes = value
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(|code| parse_currency(name, code))
        .collect::<Result<BTreeSet<_>, _>>()?;

    if codes.is_empty() {
        return Err(ConfigError::Invalid {
            name,
            reason: String::from("at least one currency code is required"),
        });
    }
    Ok(codes)
}

fn parse_number<T>(name: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        Some(raw) => raw.trim().parse().map_err(|error| ConfigError::Invalid {
            name,
            reason: format!("'{raw}': {error}"),
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (String::from(*k), String::from(*v)))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    const KEYS: [(&str, &str); 2] = [
        ("COINMARKETCAP_API_KEY", "cmc-key"),
        ("EXCHANGERATESAPI_API_KEY", "fx-key"),
    ];

    #[test]
    fn applies_defaults_when_only_keys_are_set() {
        let config = QuoteConfig::from_lookup(lookup(&KEYS)).expect("valid config");

        assert_eq!(config.coinmarketcap_api_url, DEFAULT_COINMARKETCAP_URL);
        assert_eq!(config.exchange_rates_api_url, DEFAULT_EXCHANGE_RATES_URL);
        assert_eq!(config.base_currency, "USD");
        assert_eq!(config.target_currencies.len(), 5);
        assert_eq!(config.cache_sliding_expiration_minutes, 0);
        assert_eq!(config.http_timeout_ms, DEFAULT_HTTP_TIMEOUT_MS);
    }

    #[test]
    fn missing_api_key_is_reported_by_name() {
        let err = QuoteConfig::from_lookup(lookup(&[("COINMARKETCAP_API_KEY", "k")]))
            .expect_err("missing key");
        assert_eq!(
            err,
            ConfigError::Missing {
                name: "EXCHANGERATESAPI_API_KEY"
            }
        );
    }

    #[test]
    fn target_currencies_are_trimmed_uppercased_and_deduplicated() {
        let mut pairs = KEYS.to_vec();
        pairs.push(("TARGET_CURRENCIES", " usd, EUR,,eur ,brl"));
        pairs.push(("COINMARKETCAP_API_URL", "https://cmc.test/"));

        let config = QuoteConfig::from_lookup(lookup(&pairs)).expect("valid config");

        let targets: Vec<&str> = config.target_currencies.iter().map(String::as_str).collect();
        assert_eq!(targets, ["BRL", "EUR", "USD"]);
        assert_eq!(config.coinmarketcap_api_url, "https://cmc.test");
    }

    #[test]
    fn rejects_malformed_currency_and_number() {
        let mut pairs = KEYS.to_vec();
        pairs.push(("TARGET_CURRENCIES", "USD,EURO"));
        let err = QuoteConfig::from_lookup(lookup(&pairs)).expect_err("bad currency");
        assert!(matches!(err, ConfigError::Invalid { name: "TARGET_CURRENCIES", .. }));

        let mut pairs = KEYS.to_vec();
        pairs.push(("CACHE_SLIDING_EXPIRATION_MINUTES", "soon"));
        let err = QuoteConfig::from_lookup(lookup(&pairs)).expect_err("bad number");
        assert!(matches!(
            err,
            ConfigError::Invalid {
                name: "CACHE_SLIDING_EXPIRATION_MINUTES",
                ..
            }
        ));
    }

    #[test]
    fn debug_output_redacts_api_keys() {
        let config = QuoteConfig::from_lookup(lookup(&KEYS)).expect("valid config");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("cmc-key"));
        assert!(!rendered.contains("fx-key"));
    }
}
