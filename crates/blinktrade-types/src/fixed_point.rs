//! Satoshi fixed-point encoding
//!
//! Quantities, prices and balances on the trade API travel as integers scaled
//! by 10^8. Conversion goes through [`Decimal`] so no precision is lost, and
//! a missing value stays missing in both directions (never a default of zero).

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::FixedPointError;

/// Number of fractional digits carried by a satoshi amount
pub const SATOSHI_SCALE: u32 = 8;

/// Satoshis per whole unit
pub const SATOSHI_PRECISION: i64 = 100_000_000;

/// Field names of order records that carry satoshi amounts
pub const SATOSHI_FIELDS: [&str; 8] = [
    "CumQty", "OrderQty", "CxlQty", "LeavesQty", "Price", "Volume", "LastPx", "AvgPx",
];

/// Convert a satoshi amount to its decimal value
pub fn from_satoshis(satoshis: i64) -> Decimal {
    Decimal::new(satoshis, SATOSHI_SCALE).normalize()
}

/// Convert a decimal value to satoshis, truncating digits past the 8th
pub fn to_satoshis(value: Decimal) -> Result<i64, FixedPointError> {
    value
        .checked_mul(Decimal::from(SATOSHI_PRECISION))
        .and_then(|scaled| scaled.trunc().to_i64())
        .ok_or(FixedPointError::Overflow(value))
}

/// `decimal = satoshis / 10^8`, `None` stays `None`
pub fn to_decimal(satoshis: Option<i64>) -> Option<Decimal> {
    satoshis.map(from_satoshis)
}

/// `satoshis = trunc(decimal * 10^8)`, `None` stays `None`
pub fn to_fixed_point(value: Option<Decimal>) -> Result<Option<i64>, FixedPointError> {
    value.map(to_satoshis).transpose()
}

/// Serde adapter for `Option<Decimal>` fields carried as satoshis
///
/// ```ignore
/// #[serde(rename = "Price", default, deserialize_with = "fixed_point::option::deserialize")]
/// pub price: Option<Decimal>,
/// ```
pub mod option {
    use rust_decimal::Decimal;
    use serde::{de::Error as _, ser::Error as _, Deserialize, Deserializer, Serialize, Serializer};

    /// Deserialize an optional satoshi integer into a decimal
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let satoshis = Option::<i64>::deserialize(deserializer)
            .map_err(|e| D::Error::custom(format!("expected satoshi integer: {}", e)))?;
        Ok(super::to_decimal(satoshis))
    }

    /// Serialize an optional decimal as a satoshi integer
    pub fn serialize<S>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        super::to_fixed_point(*value)
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}
