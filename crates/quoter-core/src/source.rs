use std::fmt::{Display, Formatter};

/// Upstream provider identifiers used in errors and log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    CoinMarketCap,
    ExchangeRates,
}

impl ProviderId {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CoinMarketCap => "coinmarketcap",
            Self::ExchangeRates => "exchange_rates",
        }
    }
}

impl Display for ProviderId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
