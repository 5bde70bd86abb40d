/*
[INPUT]:  Ordered request parameters and the account API secret
[OUTPUT]: Canonical query string and its lowercase hex HMAC-SHA256 signature
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or parameter encoding
*/

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::fmt;
use url::form_urlencoded;

type HmacSha256 = Hmac<Sha256>;

/// Signs canonical query strings with the account secret.
///
/// The signer holds no clock: `timestamp` and `recvWindow` arrive as ordinary
/// parameters, so the same input always yields the same signature.
#[derive(Clone)]
pub struct RequestSigner {
    secret: Vec<u8>,
}

impl fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSigner")
            .field("secret", &"***")
            .finish()
    }
}

/// A query string and the signature computed over exactly those bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedQuery {
    pub query: String,
    pub signature: String,
}

impl SignedQuery {
    /// `<query>&signature=<hex>`, the form sent on the wire.
    pub fn into_body(self) -> String {
        format!("{}&signature={}", self.query, self.signature)
    }
}

impl RequestSigner {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret: secret.as_ref().to_vec(),
        }
    }

    /// Join `key=value` pairs with `&` in the given order, form-encoding values.
    pub fn canonical_query<K, V>(params: &[(K, V)]) -> String
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params.iter().map(|(k, v)| (k.as_ref(), v.as_ref())))
            .finish()
    }

    pub fn sign<K, V>(&self, params: &[(K, V)]) -> SignedQuery
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let query = Self::canonical_query(params);
        let signature = self.signature(&query);
        SignedQuery { query, signature }
    }

    /// Lowercase hex HMAC-SHA256 of `payload`.
    pub fn signature(&self, payload: &str) -> String {
        let mut mac =
            HmacSha256::new_from_slice(&self.secret).expect("HMAC can take keys of any size");
        mac.update(payload.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}
