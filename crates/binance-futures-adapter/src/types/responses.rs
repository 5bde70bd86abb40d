/*
[INPUT]:  JSON bodies returned by the order endpoint
[OUTPUT]: OrderResult on success, ExchangeErrorBody on rejection
[POS]:    Data layer - inbound response definitions
[UPDATE]: When the exchange response schema changes
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Normalised view of an accepted order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderResult {
    #[serde(rename = "orderId")]
    pub order_id: i64,
    pub status: String,
    #[serde(rename = "executedQty", with = "rust_decimal::serde::str")]
    pub executed_qty: Decimal,
    #[serde(rename = "avgPrice", default, with = "rust_decimal::serde::str_option")]
    pub avg_price: Option<Decimal>,
    /// The response body exactly as received.
    #[serde(skip)]
    pub raw_response: String,
}

/// Error object carried by non-2xx responses, e.g. `{"code":-1100,"msg":"..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeErrorBody {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub msg: Option<String>,
}
