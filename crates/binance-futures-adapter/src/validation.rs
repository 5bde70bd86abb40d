/*
[INPUT]:  RawOrderInput (unparsed CLI strings)
[OUTPUT]: Validated OrderRequest or the first ValidationError hit
[POS]:    Validation layer - shape and sign checks before any network call
[UPDATE]: When order input rules change
*/

//! Order input validation.
//!
//! Rules run in a fixed order and the first failure wins: symbol, side,
//! order type, quantity, then price against the order type. Instrument
//! filters (tick size, step size, notional) are left to the exchange.

use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

use crate::types::{OrderRequest, OrderType, RawOrderInput, Side};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol must be a non-empty string, e.g. 'BTCUSDT'")]
    EmptySymbol,

    #[error("symbol must be alphanumeric, e.g. 'BTCUSDT' (got {0:?})")]
    InvalidSymbol(String),

    #[error("side must be either 'BUY' or 'SELL' (got {0:?})")]
    InvalidSide(String),

    #[error("order type must be either 'MARKET' or 'LIMIT' (got {0:?})")]
    InvalidOrderType(String),

    #[error("quantity must be a number (got {0:?})")]
    InvalidQuantity(String),

    #[error("quantity must be greater than 0 (got {0})")]
    NonPositiveQuantity(Decimal),

    #[error("quantity {0:?} cannot be represented exactly (at most 28 decimal places)")]
    UnrepresentableQuantity(String),

    #[error("price must not be provided for MARKET orders")]
    PriceNotAllowed,

    #[error("price is required for LIMIT orders")]
    MissingPrice,

    #[error("price must be a number for LIMIT orders (got {0:?})")]
    InvalidPrice(String),

    #[error("price must be greater than 0 for LIMIT orders (got {0})")]
    NonPositivePrice(Decimal),

    #[error("price {0:?} cannot be represented exactly (at most 28 decimal places)")]
    UnrepresentablePrice(String),
}

/// Why a numeric field did not parse.
enum DecimalError {
    NotANumber,
    /// Well-formed number that would be rounded or overflow as a `Decimal`.
    Unrepresentable,
}

/// Validate raw input into an [`OrderRequest`].
pub fn validate(input: &RawOrderInput) -> Result<OrderRequest, ValidationError> {
    let symbol = check_symbol(&input.symbol)?;
    let side = Side::from_str(&input.side)?;
    let order_type = OrderType::from_str(&input.order_type)?;
    let quantity = parse_quantity(&input.quantity)?;
    let price = parse_price(order_type, input.price.as_deref())?;

    OrderRequest::new(symbol, side, order_type, quantity, price)
}

/// Trims and upper-cases the symbol, then requires ASCII alphanumerics only.
pub(crate) fn check_symbol(symbol: &str) -> Result<String, ValidationError> {
    let symbol = symbol.trim();
    if symbol.is_empty() {
        return Err(ValidationError::EmptySymbol);
    }
    if !symbol.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::InvalidSymbol(symbol.to_string()));
    }
    Ok(symbol.to_ascii_uppercase())
}

pub(crate) fn check_quantity(quantity: Decimal) -> Result<(), ValidationError> {
    if quantity <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveQuantity(quantity));
    }
    Ok(())
}

pub(crate) fn check_price(
    order_type: OrderType,
    price: Option<Decimal>,
) -> Result<(), ValidationError> {
    match (order_type, price) {
        (OrderType::Market, None) => Ok(()),
        (OrderType::Market, Some(_)) => Err(ValidationError::PriceNotAllowed),
        (OrderType::Limit, None) => Err(ValidationError::MissingPrice),
        (OrderType::Limit, Some(p)) if p <= Decimal::ZERO => {
            Err(ValidationError::NonPositivePrice(p))
        }
        (OrderType::Limit, Some(_)) => Ok(()),
    }
}

fn parse_quantity(raw: &str) -> Result<Decimal, ValidationError> {
    let quantity = parse_decimal(raw).map_err(|err| match err {
        DecimalError::NotANumber => ValidationError::InvalidQuantity(raw.to_string()),
        DecimalError::Unrepresentable => ValidationError::UnrepresentableQuantity(raw.to_string()),
    })?;
    check_quantity(quantity)?;
    Ok(quantity)
}

fn parse_price(
    order_type: OrderType,
    raw: Option<&str>,
) -> Result<Option<Decimal>, ValidationError> {
    let price = match (order_type, raw) {
        (OrderType::Market, Some(_)) => return Err(ValidationError::PriceNotAllowed),
        (_, None) => None,
        (OrderType::Limit, Some(raw)) => Some(parse_decimal(raw).map_err(|err| match err {
            DecimalError::NotANumber => ValidationError::InvalidPrice(raw.to_string()),
            DecimalError::Unrepresentable => ValidationError::UnrepresentablePrice(raw.to_string()),
        })?),
    };
    check_price(order_type, price)?;
    Ok(price)
}

/// Accepts plain (`0.001`) and scientific (`1e-3`) notation without rounding.
/// Decimals are always finite, so `NaN` and `inf` are not numbers here.
fn parse_decimal(raw: &str) -> Result<Decimal, DecimalError> {
    let raw = raw.trim();
    if let Ok(value) = Decimal::from_str_exact(raw).or_else(|_| Decimal::from_scientific(raw)) {
        return Ok(value);
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Err(DecimalError::Unrepresentable),
        _ => Err(DecimalError::NotANumber),
    }
}
