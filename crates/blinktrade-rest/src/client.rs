//! Main REST client implementation

use std::sync::Arc;

use blinktrade_auth::Credentials;
use blinktrade_types::Balance;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::config::ClientConfig;
use crate::endpoints::{MarketEndpoints, TradingEndpoints};
use crate::error::{RestError, RestResult};
use crate::messages::OrderRequest;
use crate::normalize::OrderReport;
use crate::transport::{HttpTransport, ReqwestTransport};

/// Blinktrade HTTP API client
///
/// Provides access to the public market data and the authenticated trade
/// API of one environment, currency, and broker.
///
/// # Example
///
/// ```no_run
/// use blinktrade_rest::{BlinktradeClient, ClientConfig, Credentials};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = ClientConfig::parse("PROD", "BRL", "4")?;
///
///     // Public endpoints only
///     let client = BlinktradeClient::new(config.clone())?;
///     let ticker = client.get_ticker().await?;
///
///     // With authentication for trading endpoints
///     let creds = Credentials::from_env()?;
///     let auth_client = BlinktradeClient::with_credentials(config, creds)?;
///     let balance = auth_client.get_balance().await?;
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BlinktradeClient {
    config: ClientConfig,
    transport: Arc<dyn HttpTransport>,
    credentials: Option<Credentials>,
}

impl BlinktradeClient {
    /// Create a new client without authentication
    ///
    /// Only market data endpoints will be available.
    pub fn new(config: ClientConfig) -> RestResult<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport), None))
    }

    /// Create a new client with credentials
    ///
    /// All endpoints (market data and trading) will be available.
    pub fn with_credentials(config: ClientConfig, credentials: Credentials) -> RestResult<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport), Some(credentials)))
    }

    /// Create a client on top of a custom transport
    pub fn with_transport(
        config: ClientConfig,
        transport: Arc<dyn HttpTransport>,
        credentials: Option<Credentials>,
    ) -> Self {
        info!(
            environment = %config.environment(),
            currency = %config.currency(),
            broker = %config.broker(),
            "Created Blinktrade client"
        );

        Self {
            config,
            transport,
            credentials,
        }
    }

    /// Check if the client has credentials for trading endpoints
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// The validated configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // ========================================================================
    // Public Market Endpoints
    // ========================================================================

    /// Get market endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(self.transport.as_ref(), &self.config)
    }

    /// Get the ticker for the configured currency
    pub async fn get_ticker(&self) -> RestResult<Value> {
        self.market().get_ticker().await
    }

    /// Get the order book for the configured currency
    pub async fn get_order_book(&self) -> RestResult<Value> {
        self.market().get_order_book().await
    }

    /// Get trades executed since the unix timestamp `since` (0 for everything)
    pub async fn get_trade_list(&self, since: u64) -> RestResult<Value> {
        self.market().get_trade_list(since).await
    }

    // ========================================================================
    // Private Trading Endpoints
    // ========================================================================

    /// Get trading endpoints (requires credentials)
    pub fn trading(&self) -> RestResult<TradingEndpoints<'_>> {
        let creds = self.credentials.as_ref().ok_or(RestError::AuthRequired)?;
        Ok(TradingEndpoints::new(self.transport.as_ref(), &self.config, creds))
    }

    /// Sign and send a raw trade API message
    pub async fn send_request<M: Serialize>(&self, message: &M) -> RestResult<Value> {
        self.trading()?.send_request(message).await
    }

    /// Get the balance held at the configured broker
    pub async fn get_balance(&self) -> RestResult<Balance> {
        self.trading()?.get_balance().await
    }

    /// Place a new order
    pub async fn place_order(&self, order: &OrderRequest) -> RestResult<OrderReport> {
        self.trading()?.place_order(order).await
    }

    /// Place a limit buy order
    pub async fn buy_limit(&self, price: Decimal, quantity: Decimal) -> RestResult<OrderReport> {
        self.trading()?.buy_limit(price, quantity).await
    }

    /// Place a market buy order
    pub async fn buy_market(&self, price: Option<Decimal>, quantity: Decimal) -> RestResult<OrderReport> {
        self.trading()?.buy_market(price, quantity).await
    }

    /// Place a limit sell order
    pub async fn sell_limit(&self, price: Decimal, quantity: Decimal) -> RestResult<OrderReport> {
        self.trading()?.sell_limit(price, quantity).await
    }

    /// Place a market sell order
    pub async fn sell_market(&self, price: Option<Decimal>, quantity: Decimal) -> RestResult<OrderReport> {
        self.trading()?.sell_market(price, quantity).await
    }

    /// Cancel an order by client order id
    pub async fn cancel_order(&self, client_order_id: &str) -> RestResult<OrderReport> {
        self.trading()?.cancel_order(client_order_id).await
    }

    /// List orders that are still open
    pub async fn get_pending_orders(&self, page: u32, page_size: u32) -> RestResult<OrderReport> {
        self.trading()?.get_pending_orders(page, page_size).await
    }

    /// List orders with fills
    pub async fn get_executed_orders(&self, page: u32, page_size: u32) -> RestResult<OrderReport> {
        self.trading()?.get_executed_orders(page, page_size).await
    }
}

impl std::fmt::Debug for BlinktradeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlinktradeClient")
            .field("config", &self.config)
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}
