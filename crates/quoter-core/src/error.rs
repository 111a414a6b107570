use thiserror::Error;

use crate::ProviderId;

/// Ticker symbol rule violations, collected rather than short-circuited.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{}", .violations.join("\n"))]
pub struct ValidationError {
    violations: Vec<String>,
}

impl ValidationError {
    pub fn new(violations: Vec<String>) -> Self {
        Self { violations }
    }

    pub fn violations(&self) -> &[String] {
        &self.violations
    }

    /// True when any violation message contains `needle`.
    pub fn mentions(&self, needle: &str) -> bool {
        self.violations.iter().any(|message| message.contains(needle))
    }
}

/// Configuration errors raised while loading [`crate::QuoteConfig`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable '{name}' must be set")]
    Missing { name: &'static str },

    #[error("environment variable '{name}' is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Quote pipeline error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteErrorKind {
    Validation,
    SymbolNotFound,
    Transport,
    Parse,
    Upstream,
}

/// Failure outcome of any quote pipeline stage.
///
/// `Display` yields the bare human-readable message; the provider and
/// [`QuoteError::code`] are carried separately for logging.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuoteError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No Cryptocurrency symbol found: {symbol}")]
    SymbolNotFound { symbol: String },

    #[error("{message}")]
    Transport { provider: ProviderId, message: String },

    #[error("{message}")]
    Parse { provider: ProviderId, message: String },

    #[error("{message}")]
    Upstream { provider: ProviderId, message: String },
}

impl QuoteError {
    pub fn symbol_not_found(symbol: impl Into<String>) -> Self {
        Self::SymbolNotFound {
            symbol: symbol.into(),
        }
    }

    pub fn transport(provider: ProviderId, message: impl Into<String>) -> Self {
        Self::Transport {
            provider,
            message: message.into(),
        }
    }

    pub fn parse(provider: ProviderId, message: impl Into<String>) -> Self {
        Self::Parse {
            provider,
            message: message.into(),
        }
    }

    pub fn upstream(provider: ProviderId, message: impl Into<String>) -> Self {
        Self::Upstream {
            provider,
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> QuoteErrorKind {
        match self {
            Self::Validation(_) => QuoteErrorKind::Validation,
            Self::SymbolNotFound { .. } => QuoteErrorKind::SymbolNotFound,
            Self::Transport { .. } => QuoteErrorKind::Transport,
            Self::Parse { .. } => QuoteErrorKind::Parse,
            Self::Upstream { .. } => QuoteErrorKind::Upstream,
        }
    }

    pub const fn provider(&self) -> Option<ProviderId> {
        match self {
            Self::Validation(_) => None,
            Self::SymbolNotFound { .. } => Some(ProviderId::CoinMarketCap),
            Self::Transport { provider, .. }
            | Self::Parse { provider, .. }
            | Self::Upstream { provider, .. } => Some(*provider),
        }
    }

    pub const fn code(&self) -> &'static str {
        match self.kind() {
            QuoteErrorKind::Validation => "quote.validation",
            QuoteErrorKind::SymbolNotFound => "quote.symbol_not_found",
            QuoteErrorKind::Transport => "quote.transport",
            QuoteErrorKind::Parse => "quote.parse",
            QuoteErrorKind::Upstream => "quote.upstream",
        }
    }
}
