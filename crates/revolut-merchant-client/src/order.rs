//! Order handle.

use serde_json::Value;
use tracing::{debug, info, instrument};

use revolut_merchant_core::OrderId;

use crate::client::{Client, ORDERS_PATH};
use crate::error::ClientError;
use crate::types::{OrderState, OrderStateResponse};

/// The only state from which an order can be cancelled.
const CANCELLABLE_STATE: &str = "pending";

/// A Revolut order.
///
/// Only the id is kept locally; every inspection re-fetches the order.
#[derive(Debug, Clone)]
pub struct Order {
    id: OrderId,
    client: Client,
}

impl Order {
    pub(crate) fn new(client: Client, id: OrderId) -> Self {
        Self { id, client }
    }

    /// The order id.
    #[must_use]
    pub fn id(&self) -> &OrderId {
        &self.id
    }

    /// The client this order was obtained from.
    #[must_use]
    pub fn client(&self) -> &Client {
        &self.client
    }

    fn path(&self) -> String {
        format!("{ORDERS_PATH}/{}", self.id)
    }

    /// Fetch the current order representation (`state`, `checkout_url`, ...).
    ///
    /// # Errors
    ///
    /// Returns any request error.
    #[instrument(skip(self), fields(order_id = %self.id))]
    pub async fn retrieve(&self) -> Result<Value, ClientError> {
        self.client.get(&self.path()).await
    }

    /// Fetch the current order state.
    ///
    /// # Errors
    ///
    /// Returns any request error, or [`ClientError::Serialization`] if the
    /// order has no `state`.
    pub async fn state(&self) -> Result<OrderState, ClientError> {
        let data = self.retrieve().await?;
        let response: OrderStateResponse = serde_json::from_value(data)?;
        Ok(response.state)
    }

    /// Cancel the order if it is still pending.
    ///
    /// Returns `true` if a cancel request was sent and accepted, `false` if
    /// the order was in any other state. The state check and the cancel are
    /// two separate requests, so a concurrent state change in between can make
    /// the cancel fail with [`ClientError::Api`].
    ///
    /// # Errors
    ///
    /// Returns any request error from either call.
    #[instrument(skip(self), fields(order_id = %self.id))]
    pub async fn cancel(&self) -> Result<bool, ClientError> {
        let data = self.retrieve().await?;
        let state = data.get("state").and_then(Value::as_str);

        if state != Some(CANCELLABLE_STATE) {
            debug!(state = ?state, "Order not cancellable");
            return Ok(false);
        }

        self.client
            .post::<()>(&format!("{}/cancel", self.path()), None)
            .await?;

        info!("Cancelled Revolut order");
        Ok(true)
    }
}
