/*
[INPUT]:  RawOrderInput (or a validated OrderRequest) + an OrderGateway
[OUTPUT]: OrderResult, plus journal entries for every submission attempt
[POS]:    Service layer - validate -> journal -> submit -> journal
[UPDATE]: When changing journal contents or the submission sequence
*/

use binance_futures_adapter::{
    BinanceError, OrderGateway, OrderRequest, OrderResult, OrderType, RawOrderInput, validate,
};

use crate::logging::{LIMIT_ORDER_TARGET, MARKET_ORDER_TARGET};

type Result<T> = std::result::Result<T, BinanceError>;

/// Emit an event on the journal target of the given order type.
///
/// Mirrors `logging::journal_target`; `tracing` needs the target as a
/// constant, so the mapping cannot go through that function.
macro_rules! journal {
    ($order_type:expr, $level:ident, $($arg:tt)+) => {
        match $order_type {
            OrderType::Market => tracing::$level!(target: MARKET_ORDER_TARGET, $($arg)+),
            OrderType::Limit => tracing::$level!(target: LIMIT_ORDER_TARGET, $($arg)+),
        }
    };
}

/// Single entry point for placing orders.
///
/// Every submission writes a "submitting order" entry before the network
/// call and exactly one outcome entry pairing the request with either the
/// raw response or the error. Errors are returned untranslated.
pub struct OrderService<G> {
    gateway: G,
}

impl<G: OrderGateway> OrderService<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub async fn place_order(&self, input: &RawOrderInput) -> Result<OrderResult> {
        self.place_order_with(input, |_| {}).await
    }

    /// Like [`OrderService::place_order`], calling `on_validated` with the
    /// accepted request before anything is sent.
    pub async fn place_order_with<F>(
        &self,
        input: &RawOrderInput,
        on_validated: F,
    ) -> Result<OrderResult>
    where
        F: FnOnce(&OrderRequest),
    {
        let request = validate(input)
            .inspect_err(|err| tracing::warn!(error = %err, "order input rejected"))?;
        on_validated(&request);
        self.submit(&request).await
    }

    pub async fn place_market_order(
        &self,
        symbol: &str,
        side: &str,
        quantity: &str,
    ) -> Result<OrderResult> {
        self.place_order(&RawOrderInput {
            symbol: symbol.to_string(),
            side: side.to_string(),
            order_type: OrderType::Market.as_str().to_string(),
            quantity: quantity.to_string(),
            price: None,
        })
        .await
    }

    pub async fn place_limit_order(
        &self,
        symbol: &str,
        side: &str,
        quantity: &str,
        price: &str,
    ) -> Result<OrderResult> {
        self.place_order(&RawOrderInput {
            symbol: symbol.to_string(),
            side: side.to_string(),
            order_type: OrderType::Limit.as_str().to_string(),
            quantity: quantity.to_string(),
            price: Some(price.to_string()),
        })
        .await
    }

    /// Submit an already validated request.
    pub async fn submit(&self, request: &OrderRequest) -> Result<OrderResult> {
        let order_type = request.order_type();
        journal!(order_type, info, request = %request, "submitting order");

        match self.gateway.submit_order(request).await {
            Ok(result) => {
                journal!(
                    order_type,
                    info,
                    request = %request,
                    raw_response = %result.raw_response,
                    "order accepted"
                );
                Ok(result)
            }
            Err(err) => {
                match err.raw_response() {
                    Some(body) => journal!(
                        order_type,
                        error,
                        request = %request,
                        error = %err,
                        raw_response = %body,
                        "order failed"
                    ),
                    None => journal!(order_type, error, request = %request, error = %err, "order failed"),
                }
                Err(err)
            }
        }
    }
}
