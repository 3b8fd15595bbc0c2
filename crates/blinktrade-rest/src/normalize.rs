//! Response normalization
//!
//! Order-related replies mix several shapes in one `Responses` array:
//!
//! - execution reports (`MsgType` "8"), one flat order record each
//! - orders listings (`MsgType` "U5"), a `Columns` name list plus `OrdListGrp`
//!   rows that are zipped into records
//! - a companion balance (`MsgType` "U3") keyed by broker id
//!
//! [`OrderReport::from_responses`] folds them into one ordered list of
//! [`Order`]s plus the optional [`Balance`].

use blinktrade_types::{Balance, Broker, MsgType, Order, OrderStatus};
use serde_json::Value;

use crate::error::{RestError, RestResult};

/// Normalized result of an order-related request
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderReport {
    /// Execution reports first, then listing rows, in response order
    pub orders: Vec<Order>,
    /// Balance update sent along with the orders, if any
    pub balance: Option<Balance>,
}

impl OrderReport {
    /// Normalize the `Responses` array of a trade API reply
    pub fn from_responses(responses: &[Value], broker: Broker) -> RestResult<Self> {
        let mut orders = Vec::new();

        for item in items_of(responses, MsgType::ExecutionReport)? {
            orders.push(serde_json::from_value(item.clone())?);
        }
        for item in items_of(responses, MsgType::OrdersListResponse)? {
            orders.extend(orders_from_listing(item)?);
        }

        // an empty broker entry means no balance change to report
        let balance = match items_of(responses, MsgType::BalanceResponse)?.first() {
            Some(item) => Some(broker_balance(item, broker)?).filter(|b| !b.is_empty()),
            None => None,
        };

        Ok(Self { orders, balance })
    }

    /// Number of orders
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Returns true if no orders were reported
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// First reported order
    pub fn first(&self) -> Option<&Order> {
        self.orders.first()
    }

    /// Iterate over the orders
    pub fn iter(&self) -> std::slice::Iter<'_, Order> {
        self.orders.iter()
    }
}

impl IntoIterator for OrderReport {
    type Item = Order;
    type IntoIter = std::vec::IntoIter<Order>;

    fn into_iter(self) -> Self::IntoIter {
        self.orders.into_iter()
    }
}

/// Fail with `OrderRejected` if the first response item was rejected
pub fn ensure_not_rejected(responses: &[Value], message: &str) -> RestResult<()> {
    let first = responses
        .first()
        .ok_or_else(|| RestError::UnexpectedResponse("empty Responses array".to_string()))?;

    if first.get("OrdStatus").and_then(Value::as_str) == Some(OrderStatus::Rejected.as_str()) {
        return Err(RestError::order_rejected(message, first.clone()));
    }

    Ok(())
}

/// Balance of `broker` from a balance request reply
///
/// Takes the first item carrying a non-empty entry for the broker; an empty
/// balance when none does.
pub fn balance_from_responses(responses: &[Value], broker: Broker) -> RestResult<Balance> {
    let entry = responses.iter().find_map(|item| {
        item.get(broker.as_str())
            .filter(|entry| entry.as_object().is_some_and(|map| !map.is_empty()))
    });

    match entry {
        Some(entry) => Ok(serde_json::from_value(entry.clone())?),
        None => Ok(Balance::default()),
    }
}

fn broker_balance(item: &Value, broker: Broker) -> RestResult<Balance> {
    let entry = item.get(broker.as_str()).ok_or_else(|| {
        RestError::UnexpectedResponse(format!("balance response without broker {}", broker))
    })?;
    Ok(serde_json::from_value(entry.clone())?)
}

fn items_of(responses: &[Value], msg_type: MsgType) -> RestResult<Vec<&Value>> {
    let mut matching = Vec::new();
    for item in responses {
        let tag = item
            .get("MsgType")
            .and_then(Value::as_str)
            .ok_or_else(|| RestError::UnexpectedResponse("response item without MsgType".to_string()))?;
        if tag == msg_type.as_str() {
            matching.push(item);
        }
    }
    Ok(matching)
}

fn orders_from_listing(item: &Value) -> RestResult<Vec<Order>> {
    let columns: Vec<String> = match item.get("Columns") {
        Some(columns) => serde_json::from_value(columns.clone())?,
        None => return Err(RestError::UnexpectedResponse("orders listing without Columns".to_string())),
    };
    let rows: Vec<Vec<Value>> = match item.get("OrdListGrp") {
        Some(rows) => serde_json::from_value(rows.clone())?,
        None => return Err(RestError::UnexpectedResponse("orders listing without OrdListGrp".to_string())),
    };

    rows.into_iter()
        .map(|row| {
            if row.len() != columns.len() {
                return Err(RestError::UnexpectedResponse(format!(
                    "row has {} values for {} columns",
                    row.len(),
                    columns.len()
                )));
            }
            Ok(Order::from_row(&columns, row)?)
        })
        .collect()
}
