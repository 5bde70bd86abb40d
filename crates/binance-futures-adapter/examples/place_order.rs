/*
[INPUT]:  BINANCE_API_KEY / BINANCE_API_SECRET and an order on the command line
[OUTPUT]: Order confirmation from the futures testnet
[POS]:    Examples - signed order placement
[UPDATE]: When trading API changes
*/

use binance_futures_adapter::http::TESTNET_BASE_URL;
use binance_futures_adapter::*;

/// Example: place one order on the testnet
///
/// cargo run -p binance-futures-adapter --example place_order -- BTCUSDT BUY MARKET 0.001
/// cargo run -p binance-futures-adapter --example place_order -- BTCUSDT SELL LIMIT 0.001 90000
#[tokio::main]
async fn main() {
    println!("=== Binance Futures Order Example ===\n");

    let mut args = std::env::args().skip(1);
    let input = RawOrderInput {
        symbol: args.next().unwrap_or_else(|| "BTCUSDT".to_string()),
        side: args.next().unwrap_or_else(|| "BUY".to_string()),
        order_type: args.next().unwrap_or_else(|| "MARKET".to_string()),
        quantity: args.next().unwrap_or_else(|| "0.001".to_string()),
        price: args.next(),
    };

    let request = match validate(&input) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Invalid order: {}", e);
            return;
        }
    };
    println!("✓ Order validated: {}", request);

    let credentials = Credentials::new(
        std::env::var("BINANCE_API_KEY").unwrap_or_default(),
        std::env::var("BINANCE_API_SECRET").unwrap_or_default(),
        TESTNET_BASE_URL,
    );
    let client = match BinanceFuturesClient::new(credentials) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created");

    match client.submit_order(&request).await {
        Ok(result) => println!(
            "✓ Order {} {} (executed {}, avg price {:?})",
            result.order_id, result.status, result.executed_qty, result.avg_price
        ),
        Err(e) => eprintln!("✗ Order failed [{:?}]: {}", e.kind(), e),
    }
}
