//! # Quoter Core
//!
//! Core contracts and domain types for the Quoter price service.
//!
//! ## Overview
//!
//! Given a cryptocurrency ticker, Quoter fetches its USD price from
//! CoinMarketCap, fetches USD exchange rates from exchangeratesapi, and
//! multiplies the two into a price per configured target currency.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Upstream provider clients (CoinMarketCap, exchangeratesapi) |
//! | [`config`] | Process-wide configuration loaded from the environment |
//! | [`data_source`] | `PriceSource` / `RateSource` contracts |
//! | [`domain`] | Ticker symbol, rate table, quote result |
//! | [`error`] | Validation, configuration, and quote errors |
//! | [`http_client`] | HTTP client abstraction |
//! | [`service`] | Quote orchestration |
//! | [`source`] | Provider identifiers |
//! | [`validation`] | Ticker symbol validator |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use quoter_core::{QuoteConfig, QuoteService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = QuoteConfig::from_env()?;
//!     let service = QuoteService::from_config(&config);
//!
//!     let quotes = service.get_quotes("btc").await?;
//!     for (currency, price) in quotes.iter() {
//!         println!("{currency}: {price}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! ┌─────────────────┐
//! │  get_quotes     │
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ SymbolValidator │──── invalid ───▶ QuoteError::Validation
//! └────────┬────────┘
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ PriceSource     │────▶│ HTTP Client      │
//! └────────┬────────┘     │ (reqwest)        │
//!          ▼              │                  │
//! ┌─────────────────┐     │                  │
//! │ RateSource      │────▶│                  │
//! └────────┬────────┘     └──────────────────┘
//!          ▼
//! ┌─────────────────┐
//! │ QuoteResult     │
//! └─────────────────┘
//! ```
//!
//! Each stage runs only if every earlier stage succeeded.

pub mod adapters;
pub mod config;
pub mod data_source;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod service;
pub mod source;
pub mod validation;

// Adapter implementations
pub use adapters::{CoinMarketCapAdapter, ExchangeRatesAdapter};

// Configuration
pub use config::QuoteConfig;

// Source contracts
pub use data_source::{PriceSource, RateSource};

// Domain models
pub use domain::{ExchangeRateTable, QuoteResult, TickerSymbol};

// Error types
pub use error::{ConfigError, QuoteError, QuoteErrorKind, ValidationError};

// HTTP client types
pub use http_client::{
    HttpAuth, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, ReqwestHttpClient,
};

// Orchestration
pub use service::QuoteService;

// Source identifiers
pub use source::ProviderId;

// Validation
pub use validation::{SymbolValidator, TickerValidator};
