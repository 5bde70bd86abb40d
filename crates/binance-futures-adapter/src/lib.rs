/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public futures adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;
pub mod validation;

// Re-export commonly used types from http
pub use http::{
    BinanceError,
    BinanceFuturesClient,
    ClientConfig,
    Credentials,
    ErrorKind,
    OrderGateway,
    RequestSigner,
    Result,
    SignedQuery,
};

// Re-export all types
pub use types::*;

pub use validation::{validate, ValidationError};
