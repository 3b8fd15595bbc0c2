//! Shared types for the Blinktrade exchange API
//!
//! This crate provides the core type definitions used across the workspace.
//! It has minimal dependencies and can be used independently.
//!
//! # Key Types
//!
//! - [`Environment`], [`Currency`], [`Broker`] - Validated client identifiers
//! - [`MsgType`], [`OrderSide`], [`OrderType`], [`OrderStatus`] - Wire tags
//! - [`Symbol`] - Trading pair symbols (e.g., "BTCBRL")
//! - [`Order`], [`Balance`] - Normalized trading records
//! - [`fixed_point`] - Satoshi (10^8) integer <-> decimal conversion
//! - [`ConfigError`], [`FixedPointError`] - Error types

pub mod enums;
pub mod error;
pub mod fixed_point;
pub mod order;
pub mod symbol;

// Re-export commonly used types
pub use enums::*;
pub use error::*;
pub use order::*;
pub use symbol::*;

// Re-export rust_decimal for users
pub use rust_decimal::Decimal;
