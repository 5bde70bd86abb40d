/*
[INPUT]:  Error sources (validation, configuration, transport, exchange rejections)
[OUTPUT]: BinanceError with one variant per failure kind
[POS]:    Error handling layer - unified error type for the crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

use crate::types::ExchangeErrorBody;
use crate::validation::ValidationError;

/// Main error type for the futures adapter
#[derive(Error, Debug)]
pub enum BinanceError {
    /// Order input failed a validation rule; nothing was sent
    #[error("invalid order input: {0}")]
    Validation(#[from] ValidationError),

    /// Credentials or client settings are missing or unusable
    #[error("configuration error: {0}")]
    Config(String),

    /// Transport failure: connect, DNS, timeout, interrupted body
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The exchange answered with a non-2xx status
    #[error("exchange error (HTTP {status}, code {}): {message}", code_label(.code))]
    Exchange {
        status: u16,
        code: Option<i64>,
        message: String,
        /// Response body exactly as received
        payload: String,
    },

    /// A 2xx body without the order fields we need
    #[error("invalid response: {message}")]
    InvalidResponse {
        message: String,
        /// Response body exactly as received
        payload: String,
    },

    /// Base URL could not be parsed
    #[error("invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Coarse classification callers can match on without caring about payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Configuration,
    Network,
    Exchange,
    InvalidResponse,
}

impl BinanceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BinanceError::Validation(_) => ErrorKind::Validation,
            BinanceError::Config(_) | BinanceError::UrlParse(_) => ErrorKind::Configuration,
            BinanceError::Network(_) => ErrorKind::Network,
            BinanceError::Exchange { .. } => ErrorKind::Exchange,
            BinanceError::InvalidResponse { .. } => ErrorKind::InvalidResponse,
        }
    }

    /// True when the transport gave up waiting for the exchange.
    pub fn is_timeout(&self) -> bool {
        matches!(self, BinanceError::Network(err) if err.is_timeout())
    }

    /// The body the exchange sent, for errors that carry one.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            BinanceError::Exchange { payload, .. }
            | BinanceError::InvalidResponse { payload, .. } => Some(payload),
            _ => None,
        }
    }

    /// Build an exchange error from a non-2xx response body.
    ///
    /// JSON bodies have their `code`/`msg` lifted out; anything else is kept
    /// as the message so nothing the exchange said is lost.
    pub fn exchange(status: StatusCode, body: &str) -> Self {
        let (code, message) = match serde_json::from_str::<ExchangeErrorBody>(body) {
            Ok(parsed) => (
                parsed.code,
                parsed.msg.unwrap_or_else(|| "unknown error".to_string()),
            ),
            Err(_) if body.trim().is_empty() => (None, "empty response body".to_string()),
            Err(_) => (None, body.trim().to_string()),
        };

        BinanceError::Exchange {
            status: status.as_u16(),
            code,
            message,
            payload: body.to_string(),
        }
    }
}

fn code_label(code: &Option<i64>) -> String {
    code.map_or_else(|| "n/a".to_string(), |c| c.to_string())
}

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, BinanceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exchange_error_from_json_body() {
        let body = r#"{"code":-1100,"msg":"Illegal characters found in parameter 'symbol'."}"#;
        let err = BinanceError::exchange(StatusCode::BAD_REQUEST, body);
        match &err {
            BinanceError::Exchange {
                status,
                code,
                message,
                payload,
            } => {
                assert_eq!(*status, 400);
                assert_eq!(*code, Some(-1100));
                assert_eq!(message, "Illegal characters found in parameter 'symbol'.");
                assert_eq!(payload, body);
            }
            other => panic!("Expected Exchange error variant, got {other:?}"),
        }
        assert_eq!(err.kind(), ErrorKind::Exchange);
        assert_eq!(
            err.to_string(),
            "exchange error (HTTP 400, code -1100): Illegal characters found in parameter 'symbol'."
        );
    }

    #[test]
    fn test_exchange_error_from_non_json_body() {
        let err = BinanceError::exchange(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>");
        match err {
            BinanceError::Exchange { status, code, message, .. } => {
                assert_eq!(status, 502);
                assert_eq!(code, None);
                assert_eq!(message, "<html>bad gateway</html>");
            }
            other => panic!("Expected Exchange error variant, got {other:?}"),
        }
    }

    #[test]
    fn test_error_kinds() {
        let validation: BinanceError = ValidationError::MissingPrice.into();
        assert_eq!(validation.kind(), ErrorKind::Validation);
        assert!(!validation.is_timeout());

        let config = BinanceError::Config("missing key".to_string());
        assert_eq!(config.kind(), ErrorKind::Configuration);

        let url: BinanceError = url::Url::parse("not a url").unwrap_err().into();
        assert_eq!(url.kind(), ErrorKind::Configuration);
        assert_eq!(url.raw_response(), None);
    }

    #[test]
    fn test_raw_response_keeps_body() {
        let body = r#"{"code":-2019,"msg":"Margin is insufficient."}"#;
        let exchange = BinanceError::exchange(StatusCode::BAD_REQUEST, body);
        assert_eq!(exchange.raw_response(), Some(body));

        let invalid = BinanceError::InvalidResponse {
            message: "missing field `status`".to_string(),
            payload: r#"{"orderId":1}"#.to_string(),
        };
        assert_eq!(invalid.raw_response(), Some(r#"{"orderId":1}"#));
        assert_eq!(invalid.to_string(), "invalid response: missing field `status`");
    }
}
