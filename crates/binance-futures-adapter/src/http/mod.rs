/*
[INPUT]:  HTTP client configuration, credentials and order requests
[OUTPUT]: Signed HTTP requests and typed order results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod signature;
pub mod trade;

pub use error::{BinanceError, ErrorKind, Result};
pub use signature::{RequestSigner, SignedQuery};

pub use client::{
    BinanceFuturesClient, ClientConfig, Credentials, DEFAULT_RECV_WINDOW_MS, MAX_RECV_WINDOW_MS,
    TESTNET_BASE_URL,
};
pub use trade::{API_KEY_HEADER, ORDER_ENDPOINT, OrderGateway};
