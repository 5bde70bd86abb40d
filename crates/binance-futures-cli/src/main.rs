/*
[INPUT]:  CLI arguments, BINANCE_* environment variables (or .env)
[OUTPUT]: One order placed, console summary, journal entries, exit status
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or exit codes
*/

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{error, info};

use binance_futures_adapter::http::DEFAULT_RECV_WINDOW_MS;
use binance_futures_adapter::{
    BinanceError, BinanceFuturesClient, ClientConfig, ErrorKind, OrderResult, RawOrderInput,
};
use binance_futures_cli::logging::init_logging;
use binance_futures_cli::output::{
    error_summary, exit_code, render_order_result, render_order_summary,
};
use binance_futures_cli::{OrderService, Settings};

#[derive(Parser, Debug)]
#[command(
    name = "binance-futures-order",
    version,
    about = "Place MARKET or LIMIT orders on Binance USDT-M futures"
)]
struct Cli {
    /// Trading pair symbol, e.g. BTCUSDT
    #[arg(long)]
    symbol: String,
    /// BUY or SELL
    #[arg(long)]
    side: String,
    /// MARKET or LIMIT
    #[arg(long = "order-type", value_name = "TYPE")]
    order_type: String,
    #[arg(long, allow_hyphen_values = true)]
    quantity: String,
    /// Required for LIMIT, rejected for MARKET
    #[arg(long, allow_hyphen_values = true)]
    price: Option<String>,
    #[arg(long = "timeout-secs", value_name = "SECS", default_value_t = 10)]
    timeout_secs: u64,
    #[arg(long = "recv-window", value_name = "MS", default_value_t = DEFAULT_RECV_WINDOW_MS)]
    recv_window: u64,
    #[arg(long = "log-dir", value_name = "PATH", default_value = "logs")]
    log_dir: PathBuf,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Cli::parse();
    if let Err(err) = init_logging(&args.log_level, &args.log_dir) {
        // No subscriber to report through.
        eprintln!("Failed to set up logging: {err:#}");
        return ExitCode::FAILURE;
    }

    match run(args).await {
        Ok(result) => {
            println!("{}", render_order_result(&result));
            ExitCode::SUCCESS
        }
        Err(err) => {
            // Rejected input was already logged by the service.
            if err.kind() != ErrorKind::Validation {
                error!(kind = ?err.kind(), error = %err, "order placement failed");
            }
            eprintln!("{}", error_summary(&err));
            ExitCode::from(exit_code(&err))
        }
    }
}

async fn run(args: Cli) -> Result<OrderResult, BinanceError> {
    let settings = Settings::from_env()?;
    let config = ClientConfig {
        timeout: Duration::from_secs(args.timeout_secs),
        recv_window: args.recv_window,
        ..ClientConfig::default()
    };
    let client = BinanceFuturesClient::with_config(settings.credentials, config)?;
    info!(base_url = %client.base_url(), "exchange client ready");

    let input = RawOrderInput {
        symbol: args.symbol,
        side: args.side,
        order_type: args.order_type,
        quantity: args.quantity,
        price: args.price,
    };
    OrderService::new(client)
        .place_order_with(&input, |request| println!("{}", render_order_summary(request)))
        .await
}
