/*
[INPUT]:  Validated OrderRequest, credentials, wall-clock timestamp
[OUTPUT]: OrderResult for accepted orders, BinanceError otherwise
[POS]:    HTTP layer - signed order submission
[UPDATE]: When changing order endpoint, signing layout or response parsing
*/

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Response;
use reqwest::header::CONTENT_TYPE;

use crate::http::{BinanceError, BinanceFuturesClient, Result};
use crate::types::{OrderRequest, OrderResult};

pub const ORDER_ENDPOINT: &str = "/fapi/v1/order";
pub const API_KEY_HEADER: &str = "X-MBX-APIKEY";

/// Anything that can take a validated order to the exchange.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn submit_order(&self, request: &OrderRequest) -> Result<OrderResult>;
}

impl BinanceFuturesClient {
    /// Place a new order
    ///
    /// POST /fapi/v1/order
    /// Requires: X-MBX-APIKEY header + HMAC-signed form body. One attempt, no retry.
    pub async fn submit_order(&self, request: &OrderRequest) -> Result<OrderResult> {
        self.credentials.ensure_present()?;

        let url = self.endpoint(ORDER_ENDPOINT)?;
        let body = self.signed_order_body(request, Utc::now().timestamp_millis());

        tracing::debug!(
            %url,
            symbol = request.symbol(),
            order_type = %request.order_type(),
            "sending signed order request"
        );

        let response = self
            .http_client
            .post(url)
            .header(API_KEY_HEADER, &self.credentials.api_key)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await?;

        parse_order_response(response).await
    }

    /// Order fields, then `timestamp`, then `recvWindow`, signed as one string.
    pub(crate) fn signed_order_body(&self, request: &OrderRequest, timestamp: i64) -> String {
        let mut params = request.to_params();
        params.push(("timestamp", timestamp.to_string()));
        params.push(("recvWindow", self.recv_window.to_string()));
        self.signer.sign(&params).into_body()
    }
}

#[async_trait]
impl OrderGateway for BinanceFuturesClient {
    async fn submit_order(&self, request: &OrderRequest) -> Result<OrderResult> {
        BinanceFuturesClient::submit_order(self, request).await
    }
}

async fn parse_order_response(response: Response) -> Result<OrderResult> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        tracing::debug!(status = status.as_u16(), "exchange rejected order");
        return Err(BinanceError::exchange(status, &body));
    }

    parse_order_result(&body)
}

/// All-or-nothing: a body missing any required field is an error, never a
/// partially filled result. The body text is kept verbatim either way.
pub(crate) fn parse_order_result(body: &str) -> Result<OrderResult> {
    let mut result: OrderResult =
        serde_json::from_str(body).map_err(|err| BinanceError::InvalidResponse {
            message: format!("unexpected order response: {err}"),
            payload: body.to_string(),
        })?;
    result.raw_response = body.to_string();
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{ClientConfig, Credentials, RequestSigner};
    use crate::types::Side;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn client() -> BinanceFuturesClient {
        BinanceFuturesClient::with_config(
            Credentials::new("key", "secret", "https://example.invalid"),
            ClientConfig::default(),
        )
        .unwrap()
    }

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    #[test]
    fn test_market_body_omits_price() {
        let request = OrderRequest::market("BTCUSDT", Side::Buy, dec("0.001")).unwrap();
        let body = client().signed_order_body(&request, 1_700_000_000_000);

        let (query, signature) = body.split_once("&signature=").unwrap();
        assert_eq!(
            query,
            "symbol=BTCUSDT&side=BUY&type=MARKET&quantity=0.001&timestamp=1700000000000&recvWindow=5000"
        );
        assert!(!query.contains("price="));
        assert_eq!(signature, RequestSigner::new("secret").signature(query));
    }

    #[test]
    fn test_limit_body_includes_price_and_tif() {
        let request =
            OrderRequest::limit("BTCUSDT", Side::Sell, dec("0.001"), dec("60000")).unwrap();
        let body = client().signed_order_body(&request, 1_700_000_000_000);

        assert!(body.starts_with(
            "symbol=BTCUSDT&side=SELL&type=LIMIT&quantity=0.001&price=60000&timeInForce=GTC&timestamp=1700000000000&recvWindow=5000&signature="
        ));
    }

    #[test]
    fn test_body_is_stable_for_fixed_timestamp() {
        let request = OrderRequest::market("BTCUSDT", Side::Buy, dec("0.001")).unwrap();
        let client = client();
        assert_eq!(
            client.signed_order_body(&request, 42),
            client.signed_order_body(&request, 42)
        );
        assert_ne!(
            client.signed_order_body(&request, 42),
            client.signed_order_body(&request, 43)
        );
    }

    #[test]
    fn test_parse_order_result_with_avg_price() {
        let body = r#"{"orderId":123,"status":"FILLED","executedQty":"0.001","avgPrice":"60000.0","symbol":"BTCUSDT"}"#;
        let result = parse_order_result(body).unwrap();
        assert_eq!(result.order_id, 123);
        assert_eq!(result.status, "FILLED");
        assert_eq!(result.executed_qty, dec("0.001"));
        assert_eq!(result.avg_price, Some(dec("60000.0")));
        assert_eq!(result.raw_response, body);
    }

    #[test]
    fn test_raw_response_keeps_key_order() {
        let body = r#"{"status":"NEW","orderId":7,"executedQty":"0","clientOrderId":"x1"}"#;
        let result = parse_order_result(body).unwrap();
        assert_eq!(result.raw_response, body);
    }

    #[test]
    fn test_parse_order_result_without_avg_price() {
        let body = r#"{"orderId":7,"status":"NEW","executedQty":"0"}"#;
        let result = parse_order_result(body).unwrap();
        assert_eq!(result.avg_price, None);
    }

    #[test]
    fn test_parse_order_result_rejects_partial_body() {
        let partial = r#"{"orderId":7,"status":"NEW"}"#;
        let err = parse_order_result(partial).unwrap_err();
        assert!(matches!(err, BinanceError::InvalidResponse { .. }));
        assert_eq!(err.raw_response(), Some(partial));

        let err = parse_order_result("not json").unwrap_err();
        assert!(matches!(err, BinanceError::InvalidResponse { .. }));
        assert_eq!(err.raw_response(), Some("not json"));
    }
}
