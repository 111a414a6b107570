//! HTTP request handlers.

use axum::extract::{Query, State};
use axum::Json;
use tracing::debug;

use quoter_core::QuoteResult;

use crate::error::ApiResult;
use crate::AppState;

/// Query parameter carrying the cryptocurrency symbol.
const CODE_PARAM: &str = "code";

/// GET /quote?code={symbol} - Price of a cryptocurrency in every target currency.
///
/// The query is read as raw pairs so repeated keys never fail extraction; the
/// first `code` (key matched case-insensitively) wins. A missing `code` is
/// passed on as an empty symbol so the validator reports it.
pub async fn get_quote(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> ApiResult<Json<QuoteResult>> {
    let code = first_code(params);
    debug!(code = %code, "quote requested");

    let quotes = state.quotes.get_quotes(&code).await?;
    Ok(Json(quotes))
}

fn first_code(params: Vec<(String, String)>) -> String {
    params
        .into_iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(CODE_PARAM))
        .map(|(_, value)| value)
        .unwrap_or_default()
}
