//! Common test utilities and fixtures for integration tests
//!
//! Contains sample JSON replies captured from the Blinktrade HTTP API

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use blinktrade_rest::{
    BlinktradeClient, Broker, ClientConfig, Credentials, Currency, Environment, Header,
    HttpTransport, RestError, RestResult,
};
use serde_json::Value;

/// Balance reply for broker 4
pub const BALANCE_RESPONSE: &str = r#"{
    "Status": 200,
    "Description": "OK",
    "Responses": [{
        "MsgType": "U3",
        "4": {"BRL": 100000000, "BRL_locked": 200000000, "BTC": 300000000, "BTC_locked": 400000000},
        "ClientID": 90856083,
        "BalanceReqID": 1467403164
    }]
}"#;

/// Accepted buy order followed by the locked BRL balance
pub const BUY_ORDER_RESPONSE: &str = r#"{
    "Status": 200,
    "Description": "OK",
    "Responses": [
        {
            "OrderID": 1459144180001,
            "ExecID": 202294,
            "ExecType": "0",
            "OrdStatus": "0",
            "CumQty": 0,
            "Symbol": "BTCBRL",
            "OrderQty": 3130000,
            "LastShares": 0,
            "LastPx": 0,
            "CxlQty": 0,
            "TimeInForce": "1",
            "LeavesQty": 3130000,
            "MsgType": "8",
            "ExecSide": "1",
            "OrdType": "2",
            "Price": 217500000000,
            "Side": "1",
            "ClOrdID": 1467403664,
            "AvgPx": 0
        },
        {
            "MsgType": "U3",
            "4": {"BRL_locked": 5500000000},
            "ClientID": 90856083
        }
    ]
}"#;

/// Accepted sell order followed by the locked BTC balance
pub const SELL_ORDER_RESPONSE: &str = r#"{
    "Status": 200,
    "Description": "OK",
    "Responses": [
        {
            "OrderID": 1459144180001,
            "ExecID": 202294,
            "ExecType": "0",
            "OrdStatus": "0",
            "CumQty": 0,
            "Symbol": "BTCBRL",
            "OrderQty": 3130000,
            "LastShares": 0,
            "LastPx": 0,
            "CxlQty": 0,
            "TimeInForce": "1",
            "LeavesQty": 3130000,
            "MsgType": "8",
            "ExecSide": "1",
            "OrdType": "2",
            "Price": 217500000000,
            "Side": "2",
            "ClOrdID": 1467403664,
            "AvgPx": 0
        },
        {
            "MsgType": "U3",
            "4": {"BTC_locked": 3130000},
            "ClientID": 90856083
        }
    ]
}"#;

/// Order rejected by the exchange
pub const REJECTED_ORDER_RESPONSE: &str = r#"{
    "Status": 200,
    "Description": "OK",
    "Responses": [{
        "OrderID": null,
        "TimeInForce": "1",
        "ExecID": null,
        "ExecType": "8",
        "OrdStatus": "8",
        "CumQty": 0,
        "Price": 1000000,
        "Symbol": "BTCBRL",
        "OrderQty": 10,
        "LastShares": 0,
        "LastPx": 0,
        "CxlQty": 0,
        "Volume": 0,
        "LeavesQty": 0,
        "MsgType": "8",
        "ExecSide": "1",
        "OrdType": "2",
        "OrdRejReason": "3",
        "Side": "1",
        "ClOrdID": 1467406237,
        "AvgPx": 0
    }]
}"#;

/// Cancelled order followed by the released balance
pub const CANCEL_ORDER_RESPONSE: &str = r#"{
    "Status": 200,
    "Description": "OK",
    "Responses": [
        {
            "OrderID": 1459144180001,
            "ExecID": 202543,
            "ExecType": "4",
            "OrdStatus": "4",
            "CumQty": 0,
            "Symbol": "BTCBRL",
            "OrderQty": 3130000,
            "LastShares": 0,
            "LastPx": 0,
            "CxlQty": 3130000,
            "TimeInForce": "1",
            "LeavesQty": 0,
            "MsgType": "8",
            "ExecSide": "1",
            "OrdType": "2",
            "Price": 217500000000,
            "Side": "1",
            "ClOrdID": "1467403664",
            "AvgPx": 0
        },
        {
            "MsgType": "U3",
            "4": {"BRL_locked": 5000000000},
            "ClientID": 90856083
        }
    ]
}"#;

/// One page of an orders listing in tabular form
pub const ORDERS_LIST_RESPONSE: &str = r#"{
    "Status": 200,
    "Description": "OK",
    "Responses": [{
        "OrdListGrp": [[
            "2961106", 1459144231834, 0, "0", 3130000, 0, 0, "BTCBRL", "1", "2",
            3130000, 217500000000, "2016-07-06 13:44:53", 0, "1"
        ]],
        "PageSize": 20,
        "OrdersReqID": 1467837196,
        "MsgType": "U5",
        "Page": 0,
        "Columns": [
            "ClOrdID", "OrderID", "CumQty", "OrdStatus", "LeavesQty", "CxlQty", "AvgPx",
            "Symbol", "Side", "OrdType", "OrderQty", "Price", "OrderDate", "Volume", "TimeInForce"
        ]
    }]
}"#;

pub const TICKER_RESPONSE: &str = r#"{
    "vol": 100.0,
    "pair": "BTCBRL",
    "low": 2000.00,
    "vol_brl": 25000.00000005,
    "sell": 2200.00,
    "high": 2500.00,
    "buy": 2100.0,
    "last": 2150.0
}"#;

pub const ORDER_BOOK_RESPONSE: &str = r#"{
    "bids": [[2100.0, 1.50000005, 1], [2096.07, 12.0, 90824262], [2096.06, 4.8612554, 90803493]],
    "pair": "BTCBRL",
    "asks": [[2200.0, 2.50000005, 2], [2125.9, 0.708, 90824262], [2125.91, 4.55290567, 90800515]]
}"#;

pub const TRADES_RESPONSE: &str = r#"[
    {"tid": 1, "date": 1467037014, "price": 2300.0, "amount": 1.0, "side": "sell"},
    {"tid": 2, "date": 1467037288, "price": 2302.5, "amount": 1.0, "side": "buy"}
]"#;

/// Parse a fixture
pub fn json(fixture: &str) -> Value {
    serde_json::from_str(fixture).expect("fixture is valid JSON")
}

/// A request captured by [`MockTransport`]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub url: String,
    pub headers: Vec<Header>,
    pub body: Option<Value>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Transport replaying queued replies and recording every request
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<RestResult<Value>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn replying(fixture: &str) -> Arc<Self> {
        let mock = Self::default();
        mock.push(Ok(json(fixture)));
        Arc::new(mock)
    }

    pub fn failing(error: RestError) -> Arc<Self> {
        let mock = Self::default();
        mock.push(Err(error));
        Arc::new(mock)
    }

    pub fn push(&self, response: RestResult<Value>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests().pop().expect("at least one request")
    }

    fn next(&self, request: RecordedRequest) -> RestResult<Value> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(RestError::UnexpectedResponse("no canned response".into())))
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn get_json(&self, url: &str) -> RestResult<Value> {
        self.next(RecordedRequest {
            method: "GET",
            url: url.to_string(),
            headers: Vec::new(),
            body: None,
        })
    }

    async fn post_json(&self, url: &str, headers: &[Header], body: &Value) -> RestResult<Value> {
        self.next(RecordedRequest {
            method: "POST",
            url: url.to_string(),
            headers: headers.to_vec(),
            body: Some(body.clone()),
        })
    }
}

/// Production / BRL / Foxbit, the combination the fixtures were captured with
pub fn foxbit_config() -> ClientConfig {
    ClientConfig::new(Environment::Production, Currency::Brl, Broker::Foxbit)
}

pub fn test_credentials() -> Credentials {
    Credentials::new("key", "secret").unwrap()
}

/// Authenticated client backed by `mock`
pub fn trading_client(mock: &Arc<MockTransport>) -> BlinktradeClient {
    BlinktradeClient::with_transport(foxbit_config(), mock.clone(), Some(test_credentials()))
}

/// Unauthenticated client backed by `mock`
pub fn market_client(mock: &Arc<MockTransport>) -> BlinktradeClient {
    BlinktradeClient::with_transport(foxbit_config(), mock.clone(), None)
}
