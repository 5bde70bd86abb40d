/*
[INPUT]:  Console log level, order-journal directory
[OUTPUT]: Global tracing subscriber (stderr console + per-order-type journal files)
[POS]:    Observability layer - logging setup for the binary and tests
[UPDATE]: When changing journal file names, targets or console format
*/

//! Logging setup.
//!
//! Order events are emitted with target [`MARKET_ORDER_TARGET`] or
//! [`LIMIT_ORDER_TARGET`] and land, append-only, in `market_order.log` or
//! `limit_order.log`. Everything else goes to stderr through `EnvFilter`.

use anyhow::{anyhow, Context, Result};
use binance_futures_adapter::OrderType;
use std::path::Path;
use tracing::{Level, Subscriber};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::Targets;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

pub const MARKET_ORDER_TARGET: &str = "market_order";
pub const LIMIT_ORDER_TARGET: &str = "limit_order";

const JOURNAL_SUFFIX: &str = "log";

/// Keep in step with the `journal!` macro in `order_service`.
pub fn journal_target(order_type: OrderType) -> &'static str {
    match order_type {
        OrderType::Market => MARKET_ORDER_TARGET,
        OrderType::Limit => LIMIT_ORDER_TARGET,
    }
}

/// File name of the journal for `order_type`, e.g. `market_order.log`.
pub fn journal_file_name(order_type: OrderType) -> String {
    format!("{}.{JOURNAL_SUFFIX}", journal_target(order_type))
}

/// A layer writing only `order_type`'s journal events to `<dir>/<target>.log`.
///
/// Writes go straight to the file, so entries are on disk before the process exits.
pub fn order_journal_layer<S>(dir: &Path, order_type: OrderType) -> Result<impl Layer<S> + use<S>>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    let target = journal_target(order_type);
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(target)
        .filename_suffix(JOURNAL_SUFFIX)
        .build(dir)
        .with_context(|| format!("open {} in {}", journal_file_name(order_type), dir.display()))?;

    Ok(fmt::layer()
        .with_writer(appender)
        .with_ansi(false)
        .with_target(false)
        .with_filter(Targets::new().with_target(target, Level::INFO)))
}

/// Install the global subscriber for the binary.
pub fn init_logging(log_level: &str, log_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("create log directory {}", log_dir.display()))?;

    // Journal events are kept off the console; the CLI prints its own summary.
    let console_filter = EnvFilter::try_new(format!(
        "{log_level},{MARKET_ORDER_TARGET}=off,{LIMIT_ORDER_TARGET}=off"
    ))
    .context("invalid log level")?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(console_filter),
        )
        .with(order_journal_layer(log_dir, OrderType::Market)?)
        .with(order_journal_layer(log_dir, OrderType::Limit)?)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
