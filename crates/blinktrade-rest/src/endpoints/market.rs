//! Public market data endpoints
//!
//! These endpoints don't require authentication. Responses are returned as
//! the decoded JSON body, unchanged.

use blinktrade_types::MarketResource;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::ClientConfig;
use crate::error::RestResult;
use crate::transport::HttpTransport;

/// Public market data endpoints
pub struct MarketEndpoints<'a> {
    transport: &'a dyn HttpTransport,
    config: &'a ClientConfig,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(transport: &'a dyn HttpTransport, config: &'a ClientConfig) -> Self {
        Self { transport, config }
    }

    async fn get(&self, resource: MarketResource, query: &str) -> RestResult<Value> {
        let url = self.config.market_url(resource, query);
        debug!("Fetching {}", url);
        self.transport.get_json(&url).await
    }

    /// Get the ticker for the configured currency
    #[instrument(skip(self), fields(currency = %self.config.currency()))]
    pub async fn get_ticker(&self) -> RestResult<Value> {
        self.get(MarketResource::Ticker, "").await
    }

    /// Get the order book for the configured currency
    #[instrument(skip(self), fields(currency = %self.config.currency()))]
    pub async fn get_order_book(&self) -> RestResult<Value> {
        self.get(MarketResource::OrderBook, "").await
    }

    /// Get trades executed since the unix timestamp `since` (seconds)
    ///
    /// `since = 0` returns the full history the server is willing to send.
    #[instrument(skip(self), fields(currency = %self.config.currency()))]
    pub async fn get_trade_list(&self, since: u64) -> RestResult<Value> {
        self.get(MarketResource::Trades, &format!("?since={}", since)).await
    }
}
