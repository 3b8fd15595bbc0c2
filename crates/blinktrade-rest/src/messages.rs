//! Trade API request messages and response envelope

use blinktrade_types::{fixed_point, Broker, MsgType, OrderSide, OrderType, Symbol};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::RestResult;

/// Server-side filter selecting orders with an unfilled remainder
pub const PENDING_ORDERS_FILTER: &str = "has_leaves_qty eq 1";

/// Server-side filter selecting orders with at least one fill
pub const EXECUTED_ORDERS_FILTER: &str = "has_cum_qty eq 1";

/// Default orders list page size
pub const DEFAULT_PAGE_SIZE: u32 = 50;

static LAST_REQUEST_ID: AtomicU64 = AtomicU64::new(0);

/// Fresh id for `BalanceReqID`, `ClOrdID` and `OrdersReqID`
///
/// Unix time in seconds, bumped past the previous id so two requests issued
/// within the same second still get distinct ids.
pub fn next_request_id() -> u64 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0);

    let mut last = LAST_REQUEST_ID.load(Ordering::Relaxed);
    loop {
        let next = now.max(last + 1);
        match LAST_REQUEST_ID.compare_exchange_weak(last, next, Ordering::SeqCst, Ordering::Relaxed) {
            Ok(_) => return next,
            Err(actual) => last = actual,
        }
    }
}

/// Balance request (`U2`)
#[derive(Debug, Clone, Serialize)]
pub struct BalanceRequest {
    #[serde(rename = "MsgType")]
    pub msg_type: MsgType,
    #[serde(rename = "BalanceReqID")]
    pub request_id: u64,
}

impl BalanceRequest {
    pub fn new() -> Self {
        Self {
            msg_type: MsgType::BalanceRequest,
            request_id: next_request_id(),
        }
    }
}

impl Default for BalanceRequest {
    fn default() -> Self {
        Self::new()
    }
}

/// Order to place
///
/// Price and quantity are plain decimals here; they are converted to
/// satoshis when the wire message is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    /// Buy or sell
    pub side: OrderSide,
    /// Market or limit
    pub order_type: OrderType,
    /// Limit price (sent as null when absent)
    pub price: Option<Decimal>,
    /// Quantity in BTC
    pub quantity: Decimal,
}

impl OrderRequest {
    /// Create a limit order
    pub fn limit(side: OrderSide, price: Decimal, quantity: Decimal) -> Self {
        Self {
            side,
            order_type: OrderType::Limit,
            price: Some(price),
            quantity,
        }
    }

    /// Create a market order
    pub fn market(side: OrderSide, quantity: Decimal) -> Self {
        Self {
            side,
            order_type: OrderType::Market,
            price: None,
            quantity,
        }
    }

    /// Set the price
    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }
}

/// New order single (`D`)
#[derive(Debug, Clone, Serialize)]
pub struct NewOrderMessage {
    #[serde(rename = "MsgType")]
    pub msg_type: MsgType,
    #[serde(rename = "ClOrdID")]
    pub client_order_id: u64,
    #[serde(rename = "Symbol")]
    pub symbol: Symbol,
    #[serde(rename = "Side")]
    pub side: OrderSide,
    #[serde(rename = "OrdType")]
    pub order_type: OrderType,
    #[serde(rename = "Price")]
    pub price: Option<i64>,
    #[serde(rename = "OrderQty")]
    pub quantity: i64,
    #[serde(rename = "BrokerID")]
    pub broker: Broker,
}

impl NewOrderMessage {
    /// Build the wire message, encoding amounts as satoshis
    pub fn new(order: &OrderRequest, symbol: Symbol, broker: Broker) -> RestResult<Self> {
        Ok(Self {
            msg_type: MsgType::NewOrder,
            client_order_id: next_request_id(),
            symbol,
            side: order.side,
            order_type: order.order_type,
            price: fixed_point::to_fixed_point(order.price)?,
            quantity: fixed_point::to_satoshis(order.quantity)?,
            broker,
        })
    }
}

/// Cancel order request (`F`)
#[derive(Debug, Clone, Serialize)]
pub struct CancelOrderMessage {
    #[serde(rename = "MsgType")]
    pub msg_type: MsgType,
    #[serde(rename = "ClOrdID")]
    pub client_order_id: String,
}

impl CancelOrderMessage {
    pub fn new(client_order_id: impl Into<String>) -> Self {
        Self {
            msg_type: MsgType::CancelOrder,
            client_order_id: client_order_id.into(),
        }
    }
}

/// Paginated orders list request (`U4`)
#[derive(Debug, Clone, Serialize)]
pub struct OrdersListRequest {
    #[serde(rename = "MsgType")]
    pub msg_type: MsgType,
    #[serde(rename = "OrdersReqID")]
    pub request_id: u64,
    #[serde(rename = "Page")]
    pub page: u32,
    #[serde(rename = "PageSize")]
    pub page_size: u32,
    #[serde(rename = "Filter")]
    pub filter: Vec<String>,
}

impl OrdersListRequest {
    pub fn new(filter: &str, page: u32, page_size: u32) -> Self {
        Self {
            msg_type: MsgType::OrdersListRequest,
            request_id: next_request_id(),
            page,
            page_size,
            filter: vec![filter.to_string()],
        }
    }
}

/// Trade API response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    /// HTTP-like status code echoed in the body
    #[serde(rename = "Status", default)]
    pub status: Option<u16>,
    /// Status description
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    /// Response items, one per message the server produced
    #[serde(rename = "Responses")]
    pub responses: Vec<Value>,
}
