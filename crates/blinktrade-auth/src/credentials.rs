//! Authentication credentials for the Blinktrade trade API
//!
//! Implements HMAC-SHA256 nonce signing as required by the `/tapi` endpoint.
//!
//! # Security
//!
//! The API secret is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop (prevents memory scanning)
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretBox};
use sha2::Sha256;

use crate::error::{AuthError, AuthResult};
use crate::nonce::generate_nonce;

type HmacSha256 = Hmac<Sha256>;

/// Environment variable holding the API key
const API_KEY_VAR: &str = "BLINKTRADE_API_KEY";
/// Environment variable holding the API secret
const API_SECRET_VAR: &str = "BLINKTRADE_API_SECRET";

/// API credentials for authenticated requests
///
/// The secret is automatically zeroized when the Credentials are dropped,
/// preventing sensitive data from remaining in memory.
pub struct Credentials {
    /// API key (sent in clear in the `APIKey` header)
    api_key: String,
    /// Shared secret as UTF-8 bytes (zeroized on drop)
    secret: SecretBox<Vec<u8>>,
}

impl Credentials {
    /// Create new credentials from an API key and shared secret
    ///
    /// # Errors
    /// Returns `InvalidCredentials` if either value is empty.
    pub fn new(api_key: impl Into<String>, secret: impl AsRef<str>) -> AuthResult<Self> {
        let api_key = api_key.into();
        let secret = secret.as_ref();

        if api_key.is_empty() {
            return Err(AuthError::InvalidCredentials("API key is empty".to_string()));
        }
        if secret.is_empty() {
            return Err(AuthError::InvalidCredentials("API secret is empty".to_string()));
        }

        Ok(Self {
            api_key,
            secret: SecretBox::new(Box::new(secret.as_bytes().to_vec())),
        })
    }

    /// Create credentials from environment variables
    ///
    /// Reads `BLINKTRADE_API_KEY` and `BLINKTRADE_API_SECRET` from the environment.
    pub fn from_env() -> AuthResult<Self> {
        let api_key = std::env::var(API_KEY_VAR)
            .map_err(|_| AuthError::EnvVarNotSet(API_KEY_VAR.to_string()))?;
        let secret = std::env::var(API_SECRET_VAR)
            .map_err(|_| AuthError::EnvVarNotSet(API_SECRET_VAR.to_string()))?;

        Self::new(api_key, secret)
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Sign a nonce
    ///
    /// HMAC-SHA256 keyed by the secret's UTF-8 bytes over the nonce's UTF-8
    /// bytes, encoded as lowercase hex.
    pub fn sign(&self, nonce: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.secret.expose_secret())
            .expect("HMAC can take key of any size");
        mac.update(nonce.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}

impl Clone for Credentials {
    /// Clone credentials (creates new SecretBox with same content)
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            secret: SecretBox::new(Box::new(self.secret.expose_secret().clone())),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field(
                "api_key",
                &format!("{}...", self.api_key.chars().take(4).collect::<String>()),
            )
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// Per-request signing material
///
/// Generates a fresh nonce on construction and signs it once.
#[derive(Debug)]
pub struct RequestSigner<'a> {
    credentials: &'a Credentials,
    nonce: String,
    signature: String,
}

impl<'a> RequestSigner<'a> {
    /// Create a new request signer with a fresh nonce
    pub fn new(credentials: &'a Credentials) -> Self {
        Self::with_nonce(credentials, generate_nonce())
    }

    /// Create a signer for a caller-supplied nonce
    pub fn with_nonce(credentials: &'a Credentials, nonce: impl Into<String>) -> Self {
        let nonce = nonce.into();
        let signature = credentials.sign(&nonce);
        tracing::trace!(nonce = %nonce, "Signed request nonce");
        Self {
            credentials,
            nonce,
            signature,
        }
    }

    /// Get the nonce for this request
    pub fn nonce(&self) -> &str {
        &self.nonce
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// Get the hex signature of the nonce
    pub fn signature(&self) -> &str {
        &self.signature
    }
}
