/*
[INPUT]:  Validated OrderRequest, OrderResult or BinanceError
[OUTPUT]: Console text blocks and process exit codes
[POS]:    Presentation layer - what the user sees on stdout/stderr
[UPDATE]: When changing console wording or exit code mapping
*/

use binance_futures_adapter::{BinanceError, ErrorKind, OrderRequest, OrderResult};
use console::style;
use std::fmt::Write as _;

pub fn render_order_summary(request: &OrderRequest) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", style("Order request summary:").bold());
    let _ = writeln!(out, "----------------------");
    let _ = writeln!(out, "Symbol     : {}", request.symbol());
    let _ = writeln!(out, "Side       : {}", request.side());
    let _ = writeln!(out, "Order Type : {}", request.order_type());
    let _ = writeln!(out, "Quantity   : {}", request.quantity());
    if let Some(price) = request.price() {
        let _ = writeln!(out, "Price      : {price}");
    }
    out
}

pub fn render_order_result(result: &OrderResult) -> String {
    let avg_price = result
        .avg_price
        .map_or_else(|| "N/A".to_string(), |p| p.to_string());

    let mut out = String::new();
    let _ = writeln!(out, "{}", style("Order placed successfully.").bold().green());
    let _ = writeln!(out, "-------------------------");
    let _ = writeln!(out, "orderId     : {}", result.order_id);
    let _ = writeln!(out, "status      : {}", result.status);
    let _ = writeln!(out, "executedQty : {}", result.executed_qty);
    let _ = writeln!(out, "avgPrice    : {avg_price}");
    out
}

/// One-line, secret-free description of a failure.
pub fn error_summary(err: &BinanceError) -> String {
    match err {
        BinanceError::Validation(inner) => format!("Input validation error: {inner}"),
        BinanceError::Config(msg) => format!("Configuration error: {msg}"),
        BinanceError::UrlParse(inner) => format!("Configuration error: invalid base URL: {inner}"),
        BinanceError::Exchange {
            status,
            code: Some(code),
            message,
            ..
        } => format!("Exchange API error {status} (code {code}): {message}"),
        BinanceError::Exchange {
            status, message, ..
        } => format!("Exchange API error {status}: {message}"),
        BinanceError::Network(_) if err.is_timeout() => {
            "Network timeout while communicating with the exchange.".to_string()
        }
        BinanceError::Network(inner) => format!("Network error: {inner}"),
        BinanceError::InvalidResponse { message, .. } => {
            format!("Unexpected exchange response: {message}")
        }
    }
}

pub fn exit_code(err: &BinanceError) -> u8 {
    match err.kind() {
        ErrorKind::Validation => 2,
        ErrorKind::Configuration => 3,
        ErrorKind::Exchange => 4,
        ErrorKind::Network => 5,
        ErrorKind::InvalidResponse => 6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use binance_futures_adapter::{Side, ValidationError};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    #[test]
    fn test_summary_lists_price_only_for_limit() {
        console::set_colors_enabled(false);
        let market = OrderRequest::market("BTCUSDT", Side::Buy, dec("0.001")).unwrap();
        let limit = OrderRequest::limit("BTCUSDT", Side::Sell, dec("0.001"), dec("60000")).unwrap();

        assert!(!render_order_summary(&market).contains("Price"));
        assert!(render_order_summary(&limit).contains("Price      : 60000"));
    }

    #[test]
    fn test_result_without_avg_price() {
        console::set_colors_enabled(false);
        let result = OrderResult {
            order_id: 9,
            status: "NEW".to_string(),
            executed_qty: Decimal::ZERO,
            avg_price: None,
            raw_response: String::new(),
        };
        let rendered = render_order_result(&result);
        assert!(rendered.contains("orderId     : 9"));
        assert!(rendered.contains("avgPrice    : N/A"));
    }

    #[test]
    fn test_error_summaries_and_exit_codes() {
        let validation = BinanceError::from(ValidationError::EmptySymbol);
        assert!(error_summary(&validation).starts_with("Input validation error: symbol"));
        assert_eq!(exit_code(&validation), 2);

        let exchange = BinanceError::Exchange {
            status: 400,
            code: Some(-1100),
            message: "Illegal characters".to_string(),
            payload: String::new(),
        };
        assert_eq!(
            error_summary(&exchange),
            "Exchange API error 400 (code -1100): Illegal characters"
        );
        assert_eq!(exit_code(&exchange), 4);

        let config = BinanceError::Config("missing".to_string());
        assert_eq!(exit_code(&config), 3);
    }
}
