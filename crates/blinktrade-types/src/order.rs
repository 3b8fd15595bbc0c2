//! Normalized order and balance records

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::enums::{Currency, OrderSide, OrderStatus, OrderType};
use crate::fixed_point;
use crate::symbol::Symbol;

/// An order as reported by the exchange
///
/// Built from either a flat execution report or one row of a tabular orders
/// listing. Satoshi fields are already converted to decimals. Fields the
/// exchange sends that are not modelled here are kept in [`Order::extra`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Order {
    /// Client order id
    #[serde(rename = "ClOrdID", deserialize_with = "string_or_number")]
    pub client_order_id: String,
    /// Exchange order id (absent on rejected orders)
    #[serde(rename = "OrderID", default)]
    pub order_id: Option<u64>,
    /// Trading pair
    #[serde(rename = "Symbol")]
    pub symbol: Symbol,
    /// Buy or sell
    #[serde(rename = "Side")]
    pub side: OrderSide,
    /// Market or limit
    #[serde(rename = "OrdType")]
    pub order_type: OrderType,
    /// Current status
    #[serde(rename = "OrdStatus")]
    pub status: OrderStatus,
    /// Original quantity
    #[serde(rename = "OrderQty", default, deserialize_with = "fixed_point::option::deserialize")]
    pub quantity: Option<Decimal>,
    /// Unfilled remainder
    #[serde(rename = "LeavesQty", default, deserialize_with = "fixed_point::option::deserialize")]
    pub leaves_quantity: Option<Decimal>,
    /// Filled so far
    #[serde(rename = "CumQty", default, deserialize_with = "fixed_point::option::deserialize")]
    pub cumulative_quantity: Option<Decimal>,
    /// Cancelled quantity
    #[serde(rename = "CxlQty", default, deserialize_with = "fixed_point::option::deserialize")]
    pub cancelled_quantity: Option<Decimal>,
    /// Limit price
    #[serde(rename = "Price", default, deserialize_with = "fixed_point::option::deserialize")]
    pub price: Option<Decimal>,
    /// Average fill price
    #[serde(rename = "AvgPx", default, deserialize_with = "fixed_point::option::deserialize")]
    pub average_price: Option<Decimal>,
    /// Traded volume in the quote currency
    #[serde(rename = "Volume", default, deserialize_with = "fixed_point::option::deserialize")]
    pub volume: Option<Decimal>,
    /// Price of the last fill
    #[serde(rename = "LastPx", default, deserialize_with = "fixed_point::option::deserialize")]
    pub last_price: Option<Decimal>,
    /// Remaining fields, verbatim
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Order {
    /// Build an order from a field name -> value record
    pub fn from_record(record: serde_json::Map<String, Value>) -> Result<Self, serde_json::Error> {
        serde_json::from_value(Value::Object(record))
    }

    /// Build an order from a tabular row, zipping column names with values
    pub fn from_row(columns: &[String], row: Vec<Value>) -> Result<Self, serde_json::Error> {
        let record = columns.iter().cloned().zip(row).collect();
        Self::from_record(record)
    }

    /// Returns true if the order can still trade
    pub fn is_open(&self) -> bool {
        self.status.is_open()
    }

    /// Look up a field that is not modelled explicitly (e.g. "ExecID", "OrderDate")
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }
}

/// Account balance for one broker
///
/// Keys are currency codes, with a `_locked` suffix for amounts held by open
/// orders (e.g. "BRL", "BRL_locked", "BTC", "BTC_locked").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Balance(pub BTreeMap<String, Option<Decimal>>);

impl Balance {
    /// Get the amount for a key, `None` if absent or null
    pub fn get(&self, key: &str) -> Option<Decimal> {
        self.0.get(key).copied().flatten()
    }

    /// Available amount of a fiat currency
    pub fn available(&self, currency: Currency) -> Option<Decimal> {
        self.get(currency.as_str())
    }

    /// Amount of a fiat currency held by open orders
    pub fn locked(&self, currency: Currency) -> Option<Decimal> {
        self.get(&format!("{}_locked", currency.as_str()))
    }

    /// Returns true if no entries are present
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over all entries
    pub fn iter(&self) -> impl Iterator<Item = (&String, Option<Decimal>)> {
        self.0.iter().map(|(k, v)| (k, *v))
    }
}

impl<'de> Deserialize<'de> for Balance {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, Option<i64>>::deserialize(deserializer)?;
        Ok(Self(
            raw.into_iter()
                .map(|(key, satoshis)| (key, fixed_point::to_decimal(satoshis)))
                .collect(),
        ))
    }
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    use serde::de::Error;

    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!(
            "expected string or number, got {}",
            other
        ))),
    }
}
