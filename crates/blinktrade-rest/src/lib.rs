//! HTTP API client for the Blinktrade cryptocurrency exchange
//!
//! This crate provides market data access and trading for Blinktrade-based
//! brokers (Foxbit, SurBitcoin, Chilebit, ...).
//!
//! # Features
//!
//! - **Market Data**: Ticker, order book, trade list
//! - **Account**: Balance at the configured broker
//! - **Trading**: Place, cancel, and list orders
//!
//! # Authentication
//!
//! Trading endpoints require API credentials. Every request carries a fresh
//! microsecond nonce and its HMAC-SHA256 signature.
//!
//! # Amounts
//!
//! The exchange encodes prices and quantities as integers scaled by 10^8.
//! This client converts them to and from [`Decimal`] at the boundary, so
//! callers never see satoshi integers.
//!
//! # Example
//!
//! ```no_run
//! use blinktrade_rest::{BlinktradeClient, ClientConfig, Credentials};
//! use rust_decimal_macros::dec;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::parse("PROD", "BRL", "4")?;
//!     let creds = Credentials::from_env()?;
//!     let client = BlinktradeClient::with_credentials(config, creds)?;
//!
//!     let book = client.get_order_book().await?;
//!     println!("Order book: {}", book);
//!
//!     let report = client.buy_limit(dec!(2175), dec!(0.0313)).await?;
//!     for order in &report.orders {
//!         println!("{} {:?} left", order.client_order_id, order.leaves_quantity);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod messages;
pub mod normalize;
pub mod transport;

// Re-export main types
pub use client::BlinktradeClient;
pub use config::ClientConfig;
pub use error::{RestError, RestResult};
pub use messages::{OrderRequest, DEFAULT_PAGE_SIZE};
pub use normalize::OrderReport;
pub use transport::{Header, HttpTransport, ReqwestTransport};

pub use blinktrade_auth::Credentials;
pub use blinktrade_types::{
    Balance, Broker, ConfigError, Currency, Decimal, Environment, Order, OrderSide, OrderStatus,
    OrderType, Symbol,
};
