//! Environment, Currency, Broker, message and order enums

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::symbol::Symbol;

/// Exchange environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Environment {
    /// Live exchange
    #[serde(rename = "PROD")]
    Production,
    /// Testnet
    #[serde(rename = "TEST")]
    Test,
}

impl Environment {
    /// All supported environments
    pub const ALL: [Environment; 2] = [Self::Production, Self::Test];

    /// Returns the environment tag ("PROD" or "TEST")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Production => "PROD",
            Self::Test => "TEST",
        }
    }

    /// Human readable name
    pub fn description(&self) -> &'static str {
        match self {
            Self::Production => "Production",
            Self::Test => "Test",
        }
    }

    /// Base server URL for this environment
    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Production => "https://blinktrade.blinktrade.com",
            Self::Test => "https://blinktrade.testnet.blinktrade.com",
        }
    }

    fn choices() -> Vec<&'static str> {
        Self::ALL.iter().map(Self::as_str).collect()
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    /// Case-insensitive; "PRODUCTION" is accepted as an alias of "PROD".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "PROD" | "PRODUCTION" => Ok(Self::Production),
            "TEST" => Ok(Self::Test),
            _ => Err(ConfigError::invalid("environment", s, Self::choices())),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Fiat currency traded against BTC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Brazilian Reais
    Brl,
    /// Chilean Pesos
    Clp,
    /// Pakistani Rupee
    Pkr,
    /// Venezuelan Bolivares
    Vef,
    /// Vietnamese Dongs
    Vnd,
}

impl Currency {
    /// All supported currencies
    pub const ALL: [Currency; 5] = [Self::Brl, Self::Clp, Self::Pkr, Self::Vef, Self::Vnd];

    /// Returns the ISO code as used in URLs and balance keys
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Brl => "BRL",
            Self::Clp => "CLP",
            Self::Pkr => "PKR",
            Self::Vef => "VEF",
            Self::Vnd => "VND",
        }
    }

    /// Human readable name
    pub fn description(&self) -> &'static str {
        match self {
            Self::Brl => "Brazilian Reais",
            Self::Clp => "Chilean Pesos",
            Self::Pkr => "Pakistani Rupee",
            Self::Vef => "Venezuelan Bolivares",
            Self::Vnd => "Vietnamese Dongs",
        }
    }

    /// BTC trading symbol quoted in this currency
    pub fn symbol(&self) -> Symbol {
        Symbol::for_currency(*self)
    }

    fn choices() -> Vec<&'static str> {
        Self::ALL.iter().map(Self::as_str).collect()
    }
}

impl FromStr for Currency {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == upper)
            .ok_or_else(|| ConfigError::invalid("currency", s, Self::choices()))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Exchange broker (sub-venue)
///
/// Balances and orders are scoped per broker. Identifiers are matched
/// exactly, no case folding or trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Broker {
    /// Sur Bitcoin
    SurBitcoin,
    /// VBTC
    Vbtc,
    /// Foxbit
    Foxbit,
    /// Testnet
    Testnet,
    /// Urdubit
    Urdubit,
    /// Chilebit.net
    Chilebit,
}

impl Broker {
    /// All supported brokers
    pub const ALL: [Broker; 6] = [
        Self::SurBitcoin,
        Self::Vbtc,
        Self::Foxbit,
        Self::Testnet,
        Self::Urdubit,
        Self::Chilebit,
    ];

    /// Returns the broker id as a string, the key used in balance responses
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SurBitcoin => "1",
            Self::Vbtc => "3",
            Self::Foxbit => "4",
            Self::Testnet => "5",
            Self::Urdubit => "8",
            Self::Chilebit => "9",
        }
    }

    /// Numeric broker id
    pub fn id(&self) -> u32 {
        match self {
            Self::SurBitcoin => 1,
            Self::Vbtc => 3,
            Self::Foxbit => 4,
            Self::Testnet => 5,
            Self::Urdubit => 8,
            Self::Chilebit => 9,
        }
    }

    /// Human readable name
    pub fn description(&self) -> &'static str {
        match self {
            Self::SurBitcoin => "Sur Bitcoin",
            Self::Vbtc => "VBTC",
            Self::Foxbit => "Foxbit",
            Self::Testnet => "Testnet",
            Self::Urdubit => "Urdubit",
            Self::Chilebit => "Chilebit.net",
        }
    }

    fn choices() -> Vec<&'static str> {
        Self::ALL.iter().map(Self::as_str).collect()
    }
}

impl FromStr for Broker {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| ConfigError::invalid("broker", s, Self::choices()))
    }
}

impl TryFrom<u32> for Broker {
    type Error = ConfigError;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|b| b.id() == id)
            .ok_or_else(|| ConfigError::invalid("broker", id.to_string(), Self::choices()))
    }
}

impl fmt::Display for Broker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl Serialize for Broker {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Public market data resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarketResource {
    /// Current ticker
    Ticker,
    /// Order book snapshot
    OrderBook,
    /// Trade history
    Trades,
}

impl MarketResource {
    /// Returns the URL path segment
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ticker => "ticker",
            Self::OrderBook => "orderbook",
            Self::Trades => "trades",
        }
    }
}

impl fmt::Display for MarketResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Trade API message type tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MsgType {
    /// Balance request
    #[serde(rename = "U2")]
    BalanceRequest,
    /// Balance response
    #[serde(rename = "U3")]
    BalanceResponse,
    /// Cancel order request
    #[serde(rename = "F")]
    CancelOrder,
    /// Orders list request
    #[serde(rename = "U4")]
    OrdersListRequest,
    /// Orders list response (tabular)
    #[serde(rename = "U5")]
    OrdersListResponse,
    /// New order single
    #[serde(rename = "D")]
    NewOrder,
    /// Execution report (flat order)
    #[serde(rename = "8")]
    ExecutionReport,
    /// Position request
    #[serde(rename = "U42")]
    PositionRequest,
    /// Trade history request
    #[serde(rename = "U32")]
    TradeHistoryRequest,
    /// Traders rank request
    #[serde(rename = "U36")]
    TradersRankRequest,
}

impl MsgType {
    /// Returns the wire tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BalanceRequest => "U2",
            Self::BalanceResponse => "U3",
            Self::CancelOrder => "F",
            Self::OrdersListRequest => "U4",
            Self::OrdersListResponse => "U5",
            Self::NewOrder => "D",
            Self::ExecutionReport => "8",
            Self::PositionRequest => "U42",
            Self::TradeHistoryRequest => "U32",
            Self::TradersRankRequest => "U36",
        }
    }
}

impl fmt::Display for MsgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Order side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderSide {
    /// Buy BTC
    #[serde(rename = "1")]
    Buy,
    /// Sell BTC
    #[serde(rename = "2")]
    Sell,
}

impl OrderSide {
    /// Returns the wire tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "1",
            Self::Sell => "2",
        }
    }

    /// Returns the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => f.pad("buy"),
            Self::Sell => f.pad("sell"),
        }
    }
}

/// Order type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    /// Market order
    #[serde(rename = "1")]
    Market,
    /// Limit order
    #[serde(rename = "2")]
    Limit,
}

impl OrderType {
    /// Returns the wire tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Market => "1",
            Self::Limit => "2",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Market => f.pad("market"),
            Self::Limit => f.pad("limit"),
        }
    }
}

/// Order status as reported in execution reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Accepted, nothing filled
    #[serde(rename = "0")]
    New,
    /// Partially filled
    #[serde(rename = "1")]
    PartiallyFilled,
    /// Completely filled
    #[serde(rename = "2")]
    Filled,
    /// Cancelled
    #[serde(rename = "4")]
    Cancelled,
    /// Rejected by the exchange
    #[serde(rename = "8")]
    Rejected,
    /// Received, not yet accepted
    #[serde(rename = "A")]
    PendingNew,
}

impl OrderStatus {
    /// Returns the wire tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "0",
            Self::PartiallyFilled => "1",
            Self::Filled => "2",
            Self::Cancelled => "4",
            Self::Rejected => "8",
            Self::PendingNew => "A",
        }
    }

    /// Returns true if the order can still trade
    pub fn is_open(&self) -> bool {
        matches!(self, Self::New | Self::PartiallyFilled | Self::PendingNew)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::New => "new",
            Self::PartiallyFilled => "partially-filled",
            Self::Filled => "filled",
            Self::Cancelled => "cancelled",
            Self::Rejected => "rejected",
            Self::PendingNew => "pending-new",
        };
        f.pad(s)
    }
}
