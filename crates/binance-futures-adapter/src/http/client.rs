/*
[INPUT]:  Credentials (API key, secret, base URL) and ClientConfig (timeouts, recv window)
[OUTPUT]: Configured reqwest client and signer ready for order calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use reqwest::{Client, Url};
use std::fmt;
use std::time::Duration;

use crate::http::{BinanceError, RequestSigner, Result};

/// USDT-M futures testnet
pub const TESTNET_BASE_URL: &str = "https://testnet.binancefuture.com";

pub const DEFAULT_RECV_WINDOW_MS: u64 = 5_000;
/// Largest receive window the exchange accepts
pub const MAX_RECV_WINDOW_MS: u64 = 60_000;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Milliseconds after `timestamp` the exchange still accepts the request
    pub recv_window: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
            recv_window: DEFAULT_RECV_WINDOW_MS,
        }
    }
}

/// Account credentials and the endpoint they belong to.
///
/// Loaded once at startup and never mutated. `Debug` redacts the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
    pub base_url: String,
}

impl Credentials {
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            base_url: base_url.into(),
        }
    }

    /// Fails with [`BinanceError::Config`] when the key or secret is blank.
    pub fn ensure_present(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.api_key.trim().is_empty() {
            missing.push("API key");
        }
        if self.api_secret.trim().is_empty() {
            missing.push("API secret");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(BinanceError::Config(format!(
                "{} must be provided",
                missing.join(" and ")
            )))
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"***")
            .field("api_secret", &"***")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// HTTP client for the USDT-M futures REST API
#[derive(Debug)]
pub struct BinanceFuturesClient {
    pub(crate) http_client: Client,
    pub(crate) base_url: Url,
    pub(crate) credentials: Credentials,
    pub(crate) signer: RequestSigner,
    pub(crate) recv_window: u64,
}

impl BinanceFuturesClient {
    /// Create a new client with default configuration
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        if config.recv_window == 0 || config.recv_window > MAX_RECV_WINDOW_MS {
            return Err(BinanceError::Config(format!(
                "recv window must be between 1 and {MAX_RECV_WINDOW_MS} ms (got {})",
                config.recv_window
            )));
        }

        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|err| BinanceError::Config(format!("build HTTP client: {err}")))?;

        let base_url = Url::parse(&credentials.base_url)?;
        let signer = RequestSigner::new(credentials.api_secret.as_bytes());

        Ok(Self {
            http_client,
            base_url,
            credentials,
            signer,
            recv_window: config.recv_window,
        })
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn recv_window(&self) -> u64 {
        self.recv_window
    }

    /// Build full URL for an API path
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials::new("key", "secret", TESTNET_BASE_URL)
    }

    #[test]
    fn test_client_with_default_config() {
        let client = BinanceFuturesClient::new(credentials()).unwrap();
        assert_eq!(client.recv_window(), DEFAULT_RECV_WINDOW_MS);
        assert_eq!(
            client.endpoint("/fapi/v1/order").unwrap().as_str(),
            "https://testnet.binancefuture.com/fapi/v1/order"
        );
    }

    #[test]
    fn test_recv_window_bounds() {
        for recv_window in [0, MAX_RECV_WINDOW_MS + 1] {
            let config = ClientConfig {
                recv_window,
                ..ClientConfig::default()
            };
            let err = BinanceFuturesClient::with_config(credentials(), config).unwrap_err();
            assert!(matches!(err, BinanceError::Config(_)), "{recv_window}");
        }
    }

    #[test]
    fn test_invalid_base_url() {
        let err =
            BinanceFuturesClient::new(Credentials::new("key", "secret", "not a url")).unwrap_err();
        assert!(matches!(err, BinanceError::UrlParse(_)));
    }

    #[test]
    fn test_ensure_present() {
        assert!(credentials().ensure_present().is_ok());

        let err = Credentials::new(" ", "", TESTNET_BASE_URL)
            .ensure_present()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "configuration error: API key and API secret must be provided"
        );
    }

    #[test]
    fn test_debug_redacts_credentials() {
        let rendered = format!("{:?}", Credentials::new("my-key", "my-secret", TESTNET_BASE_URL));
        assert!(!rendered.contains("my-key"));
        assert!(!rendered.contains("my-secret"));
        assert!(rendered.contains(TESTNET_BASE_URL));
    }
}
