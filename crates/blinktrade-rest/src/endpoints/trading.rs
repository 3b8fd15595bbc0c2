//! Trading endpoints for balances and order management
//!
//! These endpoints require authentication. Every call is a signed POST of one
//! JSON message to the trade API.

use blinktrade_auth::{Credentials, RequestSigner};
use blinktrade_types::{Balance, OrderSide};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::config::ClientConfig;
use crate::error::RestResult;
use crate::messages::{
    BalanceRequest, CancelOrderMessage, MessageResponse, NewOrderMessage, OrderRequest,
    OrdersListRequest, EXECUTED_ORDERS_FILTER, PENDING_ORDERS_FILTER,
};
use crate::normalize::{balance_from_responses, ensure_not_rejected, OrderReport};
use crate::transport::{Header, HttpTransport};

/// Trading endpoints
pub struct TradingEndpoints<'a> {
    transport: &'a dyn HttpTransport,
    config: &'a ClientConfig,
    credentials: &'a Credentials,
}

impl<'a> TradingEndpoints<'a> {
    pub fn new(
        transport: &'a dyn HttpTransport,
        config: &'a ClientConfig,
        credentials: &'a Credentials,
    ) -> Self {
        Self {
            transport,
            config,
            credentials,
        }
    }

    /// Sign and POST `message`, returning the decoded JSON body
    ///
    /// The nonce is fresh for every call and the signature covers only the
    /// nonce. No retry is attempted.
    #[instrument(skip(self, message))]
    pub async fn send_request<M: Serialize>(&self, message: &M) -> RestResult<Value> {
        let body = serde_json::to_value(message)?;
        let signer = RequestSigner::new(self.credentials);

        // Content-Type comes from the transport's JSON body encoding
        let headers: [Header; 3] = [
            ("APIKey", signer.api_key().to_string()),
            ("Nonce", signer.nonce().to_string()),
            ("Signature", signer.signature().to_string()),
        ];

        debug!(msg_type = ?body.get("MsgType"), "Sending trade message");
        self.transport
            .post_json(&self.config.message_url(), &headers, &body)
            .await
    }

    async fn send_message<M: Serialize>(&self, message: &M) -> RestResult<Vec<Value>> {
        let reply = self.send_request(message).await?;
        let envelope: MessageResponse = serde_json::from_value(reply)?;
        Ok(envelope.responses)
    }

    async fn send_order_message<M: Serialize>(
        &self,
        message: &M,
        rejection: &str,
    ) -> RestResult<OrderReport> {
        let responses = self.send_message(message).await?;
        if let Err(err) = ensure_not_rejected(&responses, rejection) {
            warn!("{}", err);
            return Err(err);
        }
        OrderReport::from_responses(&responses, self.config.broker())
    }

    /// Get the balance held at the configured broker
    ///
    /// Amounts are decimals; an empty balance when the broker has no entry.
    #[instrument(skip(self), fields(broker = %self.config.broker()))]
    pub async fn get_balance(&self) -> RestResult<Balance> {
        let responses = self.send_message(&BalanceRequest::new()).await?;
        balance_from_responses(&responses, self.config.broker())
    }

    /// Place a new order on the configured symbol
    ///
    /// # Errors
    /// `OrderRejected` with the raw response item when the exchange rejects it.
    #[instrument(skip(self, order), fields(side = %order.side, order_type = ?order.order_type))]
    pub async fn place_order(&self, order: &OrderRequest) -> RestResult<OrderReport> {
        let message = NewOrderMessage::new(order, self.config.symbol(), self.config.broker())?;
        debug!(client_order_id = message.client_order_id, "Placing order");
        self.send_order_message(&message, "Unable to place the order").await
    }

    /// Buy `quantity` at `price` or better
    pub async fn buy_limit(&self, price: Decimal, quantity: Decimal) -> RestResult<OrderReport> {
        self.place_order(&OrderRequest::limit(OrderSide::Buy, price, quantity)).await
    }

    /// Buy `quantity` at the market
    ///
    /// `price` is forwarded to the exchange when given.
    pub async fn buy_market(&self, price: Option<Decimal>, quantity: Decimal) -> RestResult<OrderReport> {
        let mut order = OrderRequest::market(OrderSide::Buy, quantity);
        order.price = price;
        self.place_order(&order).await
    }

    /// Sell `quantity` at `price` or better
    pub async fn sell_limit(&self, price: Decimal, quantity: Decimal) -> RestResult<OrderReport> {
        self.place_order(&OrderRequest::limit(OrderSide::Sell, price, quantity)).await
    }

    /// Sell `quantity` at the market
    pub async fn sell_market(&self, price: Option<Decimal>, quantity: Decimal) -> RestResult<OrderReport> {
        let mut order = OrderRequest::market(OrderSide::Sell, quantity);
        order.price = price;
        self.place_order(&order).await
    }

    /// Cancel an order by client order id
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, client_order_id: &str) -> RestResult<OrderReport> {
        self.send_order_message(
            &CancelOrderMessage::new(client_order_id),
            "Unable to cancel the order",
        )
        .await
    }

    /// List orders with an unfilled remainder
    #[instrument(skip(self))]
    pub async fn get_pending_orders(&self, page: u32, page_size: u32) -> RestResult<OrderReport> {
        self.list_orders(PENDING_ORDERS_FILTER, page, page_size).await
    }

    /// List orders with at least one fill
    #[instrument(skip(self))]
    pub async fn get_executed_orders(&self, page: u32, page_size: u32) -> RestResult<OrderReport> {
        self.list_orders(EXECUTED_ORDERS_FILTER, page, page_size).await
    }

    async fn list_orders(&self, filter: &str, page: u32, page_size: u32) -> RestResult<OrderReport> {
        let message = OrdersListRequest::new(filter, page, page_size);
        self.send_order_message(&message, "Unable to list orders").await
    }
}
