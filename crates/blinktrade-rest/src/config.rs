//! Validated client configuration

use blinktrade_types::{Broker, ConfigResult, Currency, Environment, MarketResource, Symbol};
use std::time::Duration;

/// Trade and market data API version path segment
pub const API_VERSION: &str = "v1";

/// Default request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default user agent sent with every request
pub const DEFAULT_USER_AGENT: &str = "blinktrade_tools/0.1";

/// Client configuration
///
/// Environment, currency, and broker are validated once at construction and
/// cannot change afterwards. Both the market data and trading endpoints read
/// from the same configuration.
///
/// # Example
///
/// ```
/// use blinktrade_rest::ClientConfig;
///
/// let config = ClientConfig::parse("prod", "brl", "4")?
///     .with_timeout(10);
/// assert_eq!(config.base_url(), "https://blinktrade.blinktrade.com");
/// # Ok::<(), blinktrade_rest::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    environment: Environment,
    currency: Currency,
    broker: Broker,
    base_url: String,
    timeout_secs: u64,
    user_agent: String,
}

impl ClientConfig {
    /// Create a configuration from already validated identifiers
    pub fn new(environment: Environment, currency: Currency, broker: Broker) -> Self {
        Self {
            environment,
            currency,
            broker,
            base_url: environment.base_url().to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Validate raw identifiers and create a configuration
    ///
    /// Environment and currency are matched case-insensitively, the broker id
    /// exactly.
    ///
    /// # Errors
    /// `ConfigError::InvalidConfiguration` naming the first offending field
    /// and its valid choices.
    pub fn parse(environment: &str, currency: &str, broker: &str) -> ConfigResult<Self> {
        Ok(Self::new(
            environment.parse()?,
            currency.parse()?,
            broker.parse()?,
        ))
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Override the server resolved from the environment (e.g. a local mock)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Selected environment
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Selected currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Selected broker
    pub fn broker(&self) -> Broker {
        self.broker
    }

    /// Trading symbol for the selected currency
    pub fn symbol(&self) -> Symbol {
        self.currency.symbol()
    }

    /// Server URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// User agent header value
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// `<base>/blinktrade/<version>/<currency>/<resource><query>`
    pub(crate) fn market_url(&self, resource: MarketResource, query: &str) -> String {
        format!(
            "{}/blinktrade/{}/{}/{}{}",
            self.base_url, API_VERSION, self.currency, resource, query
        )
    }

    /// `<base>/tapi/<version>/message`
    pub(crate) fn message_url(&self) -> String {
        format!("{}/tapi/{}/message", self.base_url, API_VERSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resolves_canonical_values() {
        let config = ClientConfig::parse("prod", "brl", "4").unwrap();
        assert_eq!(config.environment(), Environment::Production);
        assert_eq!(config.currency(), Currency::Brl);
        assert_eq!(config.broker(), Broker::Foxbit);
        assert_eq!(config.base_url(), Environment::Production.base_url());
        assert_eq!(config.symbol().as_str(), "BTCBRL");
    }

    #[test]
    fn test_parse_every_supported_combination() {
        for env in Environment::ALL {
            for currency in Currency::ALL {
                for broker in Broker::ALL {
                    let config = ClientConfig::parse(
                        &env.as_str().to_lowercase(),
                        &currency.as_str().to_lowercase(),
                        broker.as_str(),
                    )
                    .unwrap();
                    assert_eq!(config.environment(), env);
                    assert_eq!(config.currency(), currency);
                    assert_eq!(config.broker(), broker);
                }
            }
        }
    }

    #[test]
    fn test_parse_rejects_invalid_fields() {
        let err = ClientConfig::parse("invalid_env", "BRL", "4").unwrap_err();
        assert_eq!(err.field(), "environment");

        let err = ClientConfig::parse("PROD", "invalid_currency", "4").unwrap_err();
        assert_eq!(err.field(), "currency");

        let err = ClientConfig::parse("PROD", "BRL", "invalid_broker").unwrap_err();
        assert_eq!(err.field(), "broker");
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new(Environment::Test, Currency::Vnd, Broker::Testnet)
            .with_timeout(60)
            .with_user_agent("test-agent")
            .with_base_url("http://127.0.0.1:8080/");

        assert_eq!(config.timeout(), Duration::from_secs(60));
        assert_eq!(config.user_agent(), "test-agent");
        assert_eq!(config.base_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new(Environment::Test, Currency::Brl, Broker::Testnet);
        assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.user_agent(), DEFAULT_USER_AGENT);
        assert_eq!(config.base_url(), "https://blinktrade.testnet.blinktrade.com");
    }

    #[test]
    fn test_url_construction() {
        let config = ClientConfig::new(Environment::Production, Currency::Brl, Broker::Foxbit);
        assert_eq!(
            config.market_url(MarketResource::Trades, "?since=0"),
            "https://blinktrade.blinktrade.com/blinktrade/v1/BRL/trades?since=0"
        );
        assert_eq!(
            config.market_url(MarketResource::Ticker, ""),
            "https://blinktrade.blinktrade.com/blinktrade/v1/BRL/ticker"
        );
        assert_eq!(
            config.message_url(),
            "https://blinktrade.blinktrade.com/tapi/v1/message"
        );
    }
}
