/*
[INPUT]:  Public API exports for the binance-futures-cli crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod config;
pub mod logging;
pub mod order_service;
pub mod output;

// Re-export main types for convenience
pub use config::Settings;
pub use order_service::OrderService;
