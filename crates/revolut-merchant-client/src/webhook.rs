//! Webhook handle.

use std::fmt;

use tracing::{info, instrument};

use revolut_merchant_core::{WebhookEvent, WebhookId};

use crate::client::{Client, WEBHOOKS_PATH};
use crate::error::ClientError;
use crate::signature::is_valid_webhook;
use crate::types::{WebhookRequest, WebhookResponse};

/// A registered webhook.
#[derive(Clone)]
pub struct Webhook {
    id: WebhookId,
    url: String,
    events: Vec<WebhookEvent>,
    signing_secret: Option<String>,
    client: Client,
}

impl Webhook {
    pub(crate) fn new(client: Client, response: WebhookResponse) -> Self {
        Self {
            id: response.id,
            url: response.url,
            events: response.events,
            signing_secret: response.signing_secret,
            client,
        }
    }

    /// The webhook id.
    #[must_use]
    pub fn id(&self) -> &WebhookId {
        &self.id
    }

    /// The notification target.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The subscribed events, as last seen by this handle.
    #[must_use]
    pub fn events(&self) -> &[WebhookEvent] {
        &self.events
    }

    /// The signing secret, if the API returned one.
    #[must_use]
    pub fn signing_secret(&self) -> Option<&str> {
        self.signing_secret.as_deref()
    }

    fn path(&self) -> String {
        format!("{WEBHOOKS_PATH}/{}", self.id)
    }

    /// Point the webhook at a new URL.
    ///
    /// The events are re-sent from this handle, not re-fetched. A stale local
    /// list overwrites whatever the remote webhook currently subscribes to.
    ///
    /// # Errors
    ///
    /// Returns any request error. The local URL is only changed on success.
    #[instrument(skip(self), fields(webhook_id = %self.id))]
    pub async fn update(&mut self, url: &str) -> Result<(), ClientError> {
        let request = WebhookRequest {
            url: url.to_string(),
            events: self.events.clone(),
        };

        self.client.put(&self.path(), &request).await?;
        self.url = request.url;

        info!("Updated Revolut webhook");
        Ok(())
    }

    /// Delete the webhook remotely.
    ///
    /// The handle stays usable; later calls fail with the API's error.
    ///
    /// # Errors
    ///
    /// Returns any request error.
    #[instrument(skip(self), fields(webhook_id = %self.id))]
    pub async fn delete(&self) -> Result<(), ClientError> {
        self.client.delete(&self.path()).await?;

        info!("Deleted Revolut webhook");
        Ok(())
    }

    /// Verify a delivery against this webhook's signing secret.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if no signing secret is known,
    /// which is the case for webhooks obtained by listing.
    pub fn verify(&self, raw_body: &[u8], signature: &str) -> Result<bool, ClientError> {
        let secret = self.signing_secret.as_deref().ok_or_else(|| {
            ClientError::Configuration(format!("no signing secret for webhook {}", self.id))
        })?;
        Ok(is_valid_webhook(secret, raw_body, signature))
    }
}

impl fmt::Debug for Webhook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Webhook")
            .field("id", &self.id)
            .field("url", &self.url)
            .field("events", &self.events)
            .field("signing_secret", &self.signing_secret.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}
