//! Wire-level contract for the production adapters.
//!
//! A scripted transport stands in for both providers so these tests pin the
//! exact URLs, credentials, and payload shapes the service depends on.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use quoter_core::{
    HttpClient, HttpError, HttpRequest, HttpResponse, QuoteConfig, QuoteErrorKind, QuoteService,
};
use rust_decimal_macros::dec;

const CMC_URL: &str = "https://cmc.test";
const FX_URL: &str = "https://fx.test/v1";

#[derive(Clone)]
struct ProviderCase {
    name: &'static str,
    quotes_body: Result<HttpResponse, HttpError>,
    rates_body: Result<HttpResponse, HttpError>,
    expected: Result<Vec<(&'static str, rust_decimal::Decimal)>, QuoteErrorKind>,
}

/// Answers by url prefix and records every request.
struct ScriptedTransport {
    quotes: Result<HttpResponse, HttpError>,
    rates: Result<HttpResponse, HttpError>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    fn new(
        quotes: Result<HttpResponse, HttpError>,
        rates: Result<HttpResponse, HttpError>,
    ) -> Self {
        Self {
            quotes,
            rates,
            requests: Mutex::new(Vec::new()),
        }
    }

    fn recorded(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .clone()
    }
}

impl HttpClient for ScriptedTransport {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        let response = if request.url.starts_with(CMC_URL) {
            self.quotes.clone()
        } else if request.url.starts_with(FX_URL) {
            self.rates.clone()
        } else {
            Err(HttpError::new(format!("unexpected url {}", request.url)))
        };
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .push(request);
        Box::pin(async move { response })
    }
}

fn config() -> QuoteConfig {
    QuoteConfig::from_lookup(|name| {
        let value = match name {
            "COINMARKETCAP_API_URL" => CMC_URL,
            "COINMARKETCAP_API_KEY" => "cmc-key",
            "EXCHANGERATESAPI_URL" => FX_URL,
            "EXCHANGERATESAPI_API_KEY" => "fx-key",
            "TARGET_CURRENCIES" => "USD,EUR,BRL",
            _ => return None,
        };
        Some(String::from(value))
    })
    .expect("valid config")
}

const BTC_QUOTE: &str = r#"{"status":{"error_code":0},"data":{"BTC":{"id":1,"symbol":"BTC","quote":{"USD":{"price":2.5,"volume_24h":1}}}}}"#;
const RATES: &str = r#"{"success":true,"base":"USD","rates":{"USD":1,"EUR":0.9,"BRL":5.25,"JPY":150}}"#;

fn provider_cases() -> Vec<ProviderCase> {
    vec![
        ProviderCase {
            name: "happy path",
            quotes_body: Ok(HttpResponse::ok_json(BTC_QUOTE)),
            rates_body: Ok(HttpResponse::ok_json(RATES)),
            expected: Ok(vec![
                ("BRL", dec!(13.125)),
                ("EUR", dec!(2.25)),
                ("USD", dec!(2.5)),
            ]),
        },
        ProviderCase {
            name: "unknown symbol",
            quotes_body: Ok(HttpResponse::ok_json(r#"{"data":{"ETH":{}}}"#)),
            rates_body: Ok(HttpResponse::ok_json(RATES)),
            expected: Err(QuoteErrorKind::SymbolNotFound),
        },
        ProviderCase {
            name: "quote transport down",
            quotes_body: Err(HttpError::new("connection failed")),
            rates_body: Ok(HttpResponse::ok_json(RATES)),
            expected: Err(QuoteErrorKind::Transport),
        },
        ProviderCase {
            name: "rates payload garbled",
            quotes_body: Ok(HttpResponse::ok_json(BTC_QUOTE)),
            rates_body: Ok(HttpResponse::ok_json("rates: none")),
            expected: Err(QuoteErrorKind::Parse),
        },
        ProviderCase {
            name: "rates provider rejects key",
            quotes_body: Ok(HttpResponse::ok_json(BTC_QUOTE)),
            rates_body: Ok(HttpResponse::with_status(
                401,
                r#"{"success":false,"error":{"code":101,"type":"invalid_access_key"}}"#,
            )),
            expected: Err(QuoteErrorKind::Upstream),
        },
    ]
}

#[tokio::test]
async fn quote_pipeline_honors_provider_contracts() {
    for case in provider_cases() {
        let transport = Arc::new(ScriptedTransport::new(
            case.quotes_body.clone(),
            case.rates_body.clone(),
        ));
        let service = QuoteService::with_http_client(transport, &config());

        let outcome = service.get_quotes("btc").await;

        match (&case.expected, outcome) {
            (Ok(expected), Ok(result)) => {
                let actual: Vec<_> = result.iter().collect();
                assert_eq!(&actual, expected, "case '{}'", case.name);
            }
            (Err(kind), Err(error)) => {
                assert_eq!(error.kind(), *kind, "case '{}': {error}", case.name);
            }
            (expected, actual) => {
                panic!("case '{}': expected {expected:?}, got {actual:?}", case.name)
            }
        }
    }
}

#[tokio::test]
async fn requests_carry_normalized_symbol_and_credentials() {
    let transport = Arc::new(ScriptedTransport::new(
        Ok(HttpResponse::ok_json(BTC_QUOTE)),
        Ok(HttpResponse::ok_json(RATES)),
    ));
    let service = QuoteService::with_http_client(transport.clone(), &config());

    service.get_quotes("btc").await.expect("lower case");
    service.get_quotes("BTC").await.expect("upper case");

    let requests = transport.recorded();
    assert_eq!(requests.len(), 4);

    let quote_urls: Vec<&str> = requests
        .iter()
        .filter(|r| r.url.starts_with(CMC_URL))
        .map(|r| r.url.as_str())
        .collect();
    assert_eq!(
        quote_urls,
        [
            "https://cmc.test/v1/cryptocurrency/quotes/latest?symbol=BTC",
            "https://cmc.test/v1/cryptocurrency/quotes/latest?symbol=BTC",
        ]
    );
    assert_eq!(
        requests[0].headers.get("x-cmc_pro_api_key").map(String::as_str),
        Some("cmc-key")
    );
    assert_eq!(requests[1].url, "https://fx.test/v1/latest?access_key=fx-key");
}

#[tokio::test]
async fn price_failure_skips_rates_request() {
    let transport = Arc::new(ScriptedTransport::new(
        Ok(HttpResponse::ok_json(r#"{"data":{}}"#)),
        Ok(HttpResponse::ok_json(RATES)),
    ));
    let service = QuoteService::with_http_client(transport.clone(), &config());

    let error = service.get_quotes("doge").await.expect_err("not found");

    assert_eq!(error.to_string(), "No Cryptocurrency symbol found: doge");
    let requests = transport.recorded();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].url.starts_with(CMC_URL));
}
