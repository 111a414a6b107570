use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::warn;

use quoter_core::QuoteError;

/// Handler-level error mapped to an HTTP response.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Quote(#[from] QuoteError),
}

impl ApiError {
    /// Every quote failure, upstream ones included, is reported as 400.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Quote(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Quote(error) => warn!(
                code = error.code(),
                provider = ?error.provider(),
                %status,
                "quote request failed: {error}"
            ),
        }
        (status, self.to_string()).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
