/*
[INPUT]:  Process environment (optionally seeded from .env)
[OUTPUT]: Settings carrying immutable exchange Credentials
[POS]:    Configuration layer - startup credential loading
[UPDATE]: When adding new configuration options
*/

use binance_futures_adapter::http::TESTNET_BASE_URL;
use binance_futures_adapter::{BinanceError, Credentials};
use config::{Config, Environment};
use serde::Deserialize;
use std::collections::HashMap;

/// Environment variable prefix; `BINANCE_API_KEY` maps to `api_key`.
pub const ENV_PREFIX: &str = "BINANCE";
pub const API_KEY_VAR: &str = "BINANCE_API_KEY";
pub const API_SECRET_VAR: &str = "BINANCE_API_SECRET";

/// Startup configuration, built once and passed into the client.
#[derive(Debug, Clone)]
pub struct Settings {
    pub credentials: Credentials,
}

// No Debug: holds the secret.
#[derive(Default, Deserialize)]
struct EnvSettings {
    api_key: Option<String>,
    api_secret: Option<String>,
    base_url: Option<String>,
}

impl Settings {
    /// Load `.env` if present, then read `BINANCE_*` variables.
    pub fn from_env() -> Result<Self, BinanceError> {
        dotenv::dotenv().ok();
        Self::load(Environment::with_prefix(ENV_PREFIX))
    }

    /// Same as [`Settings::from_env`] but reads from the given map instead of
    /// the process environment.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, BinanceError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: HashMap<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::load(Environment::with_prefix(ENV_PREFIX).source(Some(vars)))
    }

    fn load(environment: Environment) -> Result<Self, BinanceError> {
        let raw: EnvSettings = Config::builder()
            .add_source(environment)
            .build()
            .and_then(|config| config.try_deserialize::<EnvSettings>())
            .map_err(|err| BinanceError::Config(format!("read environment: {err}")))?;

        let api_key = non_blank(raw.api_key);
        let api_secret = non_blank(raw.api_secret);

        let (api_key, api_secret) = match (api_key, api_secret) {
            (Some(key), Some(secret)) => (key, secret),
            (key, secret) => {
                let missing: Vec<&str> = [
                    key.is_none().then_some(API_KEY_VAR),
                    secret.is_none().then_some(API_SECRET_VAR),
                ]
                .into_iter()
                .flatten()
                .collect();
                return Err(BinanceError::Config(format!(
                    "environment variables {} must be set",
                    missing.join(" and ")
                )));
            }
        };

        let base_url = non_blank(raw.base_url).unwrap_or_else(|| TESTNET_BASE_URL.to_string());

        Ok(Self {
            credentials: Credentials::new(api_key, api_secret, base_url),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
