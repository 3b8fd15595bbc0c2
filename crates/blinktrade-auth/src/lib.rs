//! Authentication for the Blinktrade trade API
//!
//! Every trade API request carries three headers: the API key, a nonce, and
//! an HMAC-SHA256 signature of that nonce keyed with the API secret.
//!
//! # Example
//!
//! ```no_run
//! use blinktrade_auth::{Credentials, RequestSigner};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Load credentials from environment
//! let creds = Credentials::from_env()?;
//!
//! // One signer per request
//! let signer = RequestSigner::new(&creds);
//! println!("APIKey: {}", signer.api_key());
//! println!("Nonce: {}", signer.nonce());
//! println!("Signature: {}", signer.signature());
//! # Ok(())
//! # }
//! ```

mod credentials;
mod error;
mod nonce;

pub use credentials::{Credentials, RequestSigner};
pub use error::{AuthError, AuthResult};
pub use nonce::{generate_nonce, NONCE_PRECISION};
