/*
[INPUT]:  Raw CLI strings and validated order fields
[OUTPUT]: RawOrderInput and the immutable OrderRequest value object
[POS]:    Data layer - outbound order definitions
[UPDATE]: When order parameters sent to the exchange change
*/

use rust_decimal::Decimal;
use std::fmt;

use super::enums::{OrderType, Side, TimeInForce};
use crate::validation::{self, ValidationError};

/// Order fields exactly as the user typed them, before any validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOrderInput {
    pub symbol: String,
    pub side: String,
    pub order_type: String,
    pub quantity: String,
    pub price: Option<String>,
}

/// A well-formed order. Construction fails unless the price is present
/// exactly when the order type is LIMIT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    symbol: String,
    side: Side,
    order_type: OrderType,
    quantity: Decimal,
    price: Option<Decimal>,
}

impl OrderRequest {
    pub fn new(
        symbol: impl Into<String>,
        side: Side,
        order_type: OrderType,
        quantity: Decimal,
        price: Option<Decimal>,
    ) -> Result<Self, ValidationError> {
        let symbol: String = symbol.into();
        let symbol = validation::check_symbol(&symbol)?;
        validation::check_quantity(quantity)?;
        validation::check_price(order_type, price)?;

        Ok(Self {
            symbol,
            side,
            order_type,
            quantity: quantity.normalize(),
            price: price.map(|p| p.normalize()),
        })
    }

    pub fn market(
        symbol: impl Into<String>,
        side: Side,
        quantity: Decimal,
    ) -> Result<Self, ValidationError> {
        Self::new(symbol, side, OrderType::Market, quantity, None)
    }

    pub fn limit(
        symbol: impl Into<String>,
        side: Side,
        quantity: Decimal,
        price: Decimal,
    ) -> Result<Self, ValidationError> {
        Self::new(symbol, side, OrderType::Limit, quantity, Some(price))
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn price(&self) -> Option<Decimal> {
        self.price
    }

    pub fn time_in_force(&self) -> Option<TimeInForce> {
        self.order_type.requires_price().then_some(TimeInForce::Gtc)
    }

    /// Order fields in the order they are signed and sent.
    ///
    /// `timestamp` and `recvWindow` are appended by the client, never here.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("symbol", self.symbol.clone()),
            ("side", self.side.as_str().to_string()),
            ("type", self.order_type.as_str().to_string()),
            ("quantity", self.quantity.to_string()),
        ];
        if let Some(price) = self.price {
            params.push(("price", price.to_string()));
        }
        if let Some(tif) = self.time_in_force() {
            params.push(("timeInForce", tif.as_str().to_string()));
        }
        params
    }
}

/// One-line summary used in the order journal and console output.
impl fmt::Display for OrderRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "symbol={} side={} type={} quantity={}",
            self.symbol, self.side, self.order_type, self.quantity
        )?;
        if let Some(price) = self.price {
            write!(f, " price={price}")?;
        }
        Ok(())
    }
}
