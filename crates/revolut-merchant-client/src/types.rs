//! Request and response types for the Merchant API.

use serde::{Deserialize, Serialize};
use std::fmt;

use revolut_merchant_core::{OrderId, WebhookEvent, WebhookId};

/// Body of `POST /api/orders`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateOrderRequest {
    /// Amount in minor units, as a decimal string.
    pub amount: String,
    /// ISO 4217 alphabetic code.
    pub currency: String,
    /// Where the customer lands after checkout.
    pub redirect_url: String,
}

/// The part of an order response the client keeps.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderResponse {
    /// Order ID.
    pub id: OrderId,
}

/// The `state` field of a retrieved order.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct OrderStateResponse {
    pub state: OrderState,
}

/// Remote state of an order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum OrderState {
    /// Created, awaiting payment. The only cancellable state.
    Pending,
    /// Payment in progress.
    Processing,
    /// Payment authorised, not yet captured.
    Authorised,
    /// Payment captured.
    Completed,
    /// Cancelled by the merchant.
    Cancelled,
    /// Payment failed.
    Failed,
    /// A state this client does not know about.
    Other(String),
}

impl OrderState {
    /// The wire name of the state.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Authorised => "authorised",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Failed => "failed",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for OrderState {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pending" => Self::Pending,
            "processing" => Self::Processing,
            "authorised" => Self::Authorised,
            "completed" => Self::Completed,
            "cancelled" => Self::Cancelled,
            "failed" => Self::Failed,
            _ => Self::Other(value),
        }
    }
}

impl fmt::Display for OrderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /api/1.0/webhooks` and `PUT /api/1.0/webhooks/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookRequest {
    /// Notification target.
    pub url: String,
    /// Subscribed events.
    pub events: Vec<WebhookEvent>,
}

/// A webhook as returned by the API.
#[derive(Clone, Deserialize)]
pub struct WebhookResponse {
    /// Webhook ID.
    pub id: WebhookId,
    /// Notification target.
    pub url: String,
    /// Subscribed events.
    #[serde(default)]
    pub events: Vec<WebhookEvent>,
    /// Signing secret, only returned on creation.
    #[serde(default)]
    pub signing_secret: Option<String>,
}

impl fmt::Debug for WebhookResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookResponse")
            .field("id", &self.id)
            .field("url", &self.url)
            .field("events", &self.events)
            .field("signing_secret", &self.signing_secret.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
