//! Revolut Merchant API client.
//!
//! Typed operations for payment orders and webhooks, plus webhook signature
//! verification.
//!
//! # Example
//!
//! ```no_run
//! use revolut_merchant_client::{Client, ClientConfig, Currency, WebhookEvent};
//! use rust_decimal_macros::dec;
//!
//! # async fn example() -> Result<(), revolut_merchant_client::ClientError> {
//! let client = Client::new(ClientConfig::new("sk_sandbox_key").sandbox(true))?;
//!
//! // 50.00 EUR is sent as "5000"
//! let order = client
//!     .create_order(dec!(50.00), &Currency::EUR, "https://shop.example.com/thanks")
//!     .await?;
//! let details = order.retrieve().await?;
//! println!("Checkout at {}", details["checkout_url"]);
//!
//! let webhook = client
//!     .create_webhook(
//!         "https://shop.example.com/revolut",
//!         [WebhookEvent::OrderCompleted, WebhookEvent::OrderCanceled],
//!     )
//!     .await?;
//!
//! // Later, in the webhook handler:
//! # let (body, signature) = (b"{}".as_slice(), "");
//! if webhook.verify(body, signature)? {
//!     // trusted delivery
//! }
//!
//! if order.cancel().await? {
//!     println!("Order {} cancelled", order.id());
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod config;
mod error;
mod headers;
mod http;
mod order;
mod signature;
mod types;
mod webhook;

pub use client::Client;
pub use config::{ClientConfig, Environment, API_VERSION, PRODUCTION_URL, SANDBOX_URL};
pub use error::{ClientError, Result};
pub use headers::{HeaderSet, API_VERSION_HEADER};
pub use order::Order;
pub use signature::{is_valid_webhook, webhook_signature};
pub use types::*;
pub use webhook::Webhook;

pub use revolut_merchant_core::{
    to_minor_units, CoreError, Currency, Decimal, OrderId, WebhookEvent, WebhookId,
};
pub use reqwest::Method;
