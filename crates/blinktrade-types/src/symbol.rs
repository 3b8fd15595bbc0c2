//! Trading pair symbols (BTCBRL format)

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::Currency;

/// Base asset of every pair on the exchange
const BASE_ASSET: &str = "BTC";

/// Trading pair symbol (BTC followed by the quote currency, no separator)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// BTC/USD trading pair
    pub const BTC_USD: &'static str = "BTCUSD";
    /// BTC/BRL trading pair
    pub const BTC_BRL: &'static str = "BTCBRL";
    /// BTC/CLP trading pair
    pub const BTC_CLP: &'static str = "BTCCLP";
    /// BTC/PKR trading pair
    pub const BTC_PKR: &'static str = "BTCPKR";
    /// BTC/VEF trading pair
    pub const BTC_VEF: &'static str = "BTCVEF";
    /// BTC/VND trading pair
    pub const BTC_VND: &'static str = "BTCVND";

    /// Create a new symbol from a string
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// The BTC pair quoted in `currency`
    pub fn for_currency(currency: Currency) -> Self {
        Self(format!("{}{}", BASE_ASSET, currency.as_str()))
    }

    /// Get the symbol as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the base asset (e.g., "BTC" from "BTCBRL")
    pub fn base(&self) -> Option<&str> {
        self.0.get(..BASE_ASSET.len())
    }

    /// Get the quote currency (e.g., "BRL" from "BTCBRL")
    pub fn quote(&self) -> Option<&str> {
        self.0.get(BASE_ASSET.len()..).filter(|q| !q.is_empty())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<Currency> for Symbol {
    fn from(currency: Currency) -> Self {
        Self::for_currency(currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_for_currency() {
        assert_eq!(Symbol::for_currency(Currency::Brl).as_str(), Symbol::BTC_BRL);
        assert_eq!(Currency::Clp.symbol().as_str(), Symbol::BTC_CLP);
        assert_eq!(Currency::Pkr.symbol().as_str(), Symbol::BTC_PKR);
        assert_eq!(Currency::Vef.symbol().as_str(), Symbol::BTC_VEF);
        assert_eq!(Currency::Vnd.symbol().as_str(), Symbol::BTC_VND);
    }

    #[test]
    fn test_symbol_parts() {
        let symbol = Symbol::from(Symbol::BTC_USD);
        assert_eq!(symbol.base(), Some("BTC"));
        assert_eq!(symbol.quote(), Some("USD"));

        let short = Symbol::new("BTC");
        assert_eq!(short.quote(), None);
    }

    #[test]
    fn test_symbol_serde_transparent() {
        let symbol: Symbol = serde_json::from_str("\"BTCBRL\"").unwrap();
        assert_eq!(symbol, Currency::Brl.symbol());
        assert_eq!(serde_json::to_string(&symbol).unwrap(), "\"BTCBRL\"");
    }
}
