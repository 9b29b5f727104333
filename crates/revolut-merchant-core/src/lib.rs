//! Core types for the Revolut Merchant client.
//!
//! This crate holds the I/O-free building blocks used by the client SDK:
//!
//! - **Currencies**: `Currency`, `to_minor_units`
//! - **Webhook events**: `WebhookEvent`
//! - **Identifiers**: `OrderId`, `WebhookId`
//!
//! # Minor units
//!
//! Amounts travel over the wire as integers in the currency's minor unit.
//! `to_minor_units(dec!(10.50), &Currency::EUR)` is `1050`. Excess precision is
//! truncated toward zero, never rounded.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod currency;
pub mod error;
pub mod events;
pub mod ids;

pub use currency::{to_minor_units, Currency};
pub use error::{CoreError, Result};
pub use events::WebhookEvent;
pub use ids::{IdError, OrderId, WebhookId};
pub use rust_decimal::Decimal;
