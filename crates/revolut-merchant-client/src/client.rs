//! Revolut Merchant API client implementation.

use std::sync::Arc;

use reqwest::Method;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, instrument};

use revolut_merchant_core::{to_minor_units, Currency, OrderId, WebhookEvent};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::headers::HeaderSet;
use crate::http;
use crate::order::Order;
use crate::types::{CreateOrderRequest, OrderResponse, WebhookRequest, WebhookResponse};
use crate::webhook::Webhook;

pub(crate) const ORDERS_PATH: &str = "/api/orders";
pub(crate) const ORDERS_LIST_PATH: &str = "/api/1.0/orders";
pub(crate) const WEBHOOKS_PATH: &str = "/api/1.0/webhooks";

/// Revolut Merchant API client.
///
/// Cloning is cheap: clones share one immutable configuration. Every
/// [`Order`] and [`Webhook`] carries a clone for its follow-up calls.
#[derive(Debug, Clone)]
pub struct Client {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    http: reqwest::Client,
    base_url: String,
    api_version: String,
    headers: HeaderSet,
}

impl Client {
    /// Create a client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if the secret key or API version
    /// cannot be used as a header value, or [`ClientError::Http`] if the HTTP
    /// client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let headers = HeaderSet::new(&config.secret_key, &config.api_version)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            inner: Arc::new(Inner {
                http,
                base_url: config.resolved_base_url().to_string(),
                api_version: config.api_version,
                headers,
            }),
        })
    }

    /// Create a client from `REVOLUT_*` environment variables.
    ///
    /// # Errors
    ///
    /// See [`ClientConfig::from_env`] and [`Client::new`].
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// API version sent with each request.
    #[must_use]
    pub fn api_version(&self) -> &str {
        &self.inner.api_version
    }

    /// The per-method header sets.
    #[must_use]
    pub fn headers(&self) -> &HeaderSet {
        &self.inner.headers
    }

    /// Send a raw request and return the decoded JSON body.
    ///
    /// Headers are chosen by method (see [`HeaderSet::for_method`]).
    /// `path` must start with `/`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] on transport failure,
    /// [`ClientError::Decode`] if the body is not JSON, or
    /// [`ClientError::Api`] if the status is 400 or above.
    pub async fn request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Value, ClientError>
    where
        B: Serialize + ?Sized,
    {
        let headers = self.inner.headers.for_method(&method);
        http::execute(&self.inner.http, &self.inner.base_url, method, path, headers, body).await
    }

    pub(crate) async fn get(&self, path: &str) -> Result<Value, ClientError> {
        self.request::<()>(Method::GET, path, None).await
    }

    pub(crate) async fn post<B>(&self, path: &str, body: Option<&B>) -> Result<Value, ClientError>
    where
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, body).await
    }

    pub(crate) async fn put<B>(&self, path: &str, body: &B) -> Result<Value, ClientError>
    where
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, path, Some(body)).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<Value, ClientError> {
        self.request::<()>(Method::DELETE, path, None).await
    }

    /// Create an order for `amount` major units of `currency`.
    ///
    /// The amount is converted to minor units with truncation, so `10.556 EUR`
    /// is sent as `"1055"`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Core`] if the amount overflows, any request
    /// error, or [`ClientError::Serialization`] if the response has no `id`.
    #[instrument(skip(self, amount))]
    pub async fn create_order(
        &self,
        amount: impl Into<Decimal>,
        currency: &Currency,
        redirect_url: &str,
    ) -> Result<Order, ClientError> {
        let minor_units = to_minor_units(amount.into(), currency)?;

        let request = CreateOrderRequest {
            amount: minor_units.to_string(),
            currency: currency.code().to_string(),
            redirect_url: redirect_url.to_string(),
        };

        let data = self.post(ORDERS_PATH, Some(&request)).await?;
        let response: OrderResponse = serde_json::from_value(data)?;

        info!(order_id = %response.id, minor_units, "Created Revolut order");
        Ok(Order::new(self.clone(), response.id))
    }

    /// List orders.
    ///
    /// Only the first page returned by the API is fetched.
    ///
    /// # Errors
    ///
    /// Returns any request error, or [`ClientError::Serialization`] if the
    /// body is not an array of orders.
    #[instrument(skip(self))]
    pub async fn retrieve_orders(&self) -> Result<Vec<Order>, ClientError> {
        let data = self.get(ORDERS_LIST_PATH).await?;
        let orders: Vec<OrderResponse> = serde_json::from_value(data)?;

        Ok(orders
            .into_iter()
            .map(|order| Order::new(self.clone(), order.id))
            .collect())
    }

    /// Handle for an existing order, without a network call.
    #[must_use]
    pub fn order(&self, id: OrderId) -> Order {
        Order::new(self.clone(), id)
    }

    /// Register a webhook for `events`.
    ///
    /// Duplicate events are sent once. The returned webhook carries the
    /// signing secret when the API provides it.
    ///
    /// # Errors
    ///
    /// Returns any request error, or [`ClientError::Serialization`] if the
    /// response does not describe a webhook.
    #[instrument(skip(self, events))]
    pub async fn create_webhook(
        &self,
        url: &str,
        events: impl IntoIterator<Item = WebhookEvent>,
    ) -> Result<Webhook, ClientError> {
        let mut unique = Vec::new();
        for event in events {
            if !unique.contains(&event) {
                unique.push(event);
            }
        }

        let request = WebhookRequest {
            url: url.to_string(),
            events: unique,
        };

        let data = self.post(WEBHOOKS_PATH, Some(&request)).await?;
        let response: WebhookResponse = serde_json::from_value(data)?;

        info!(webhook_id = %response.id, "Created Revolut webhook");
        Ok(Webhook::new(self.clone(), response))
    }

    /// List registered webhooks.
    ///
    /// # Errors
    ///
    /// Returns any request error, or [`ClientError::Serialization`] if the
    /// body is not an array of webhooks.
    #[instrument(skip(self))]
    pub async fn retrieve_webhooks(&self) -> Result<Vec<Webhook>, ClientError> {
        let data = self.get(WEBHOOKS_PATH).await?;
        let webhooks: Vec<WebhookResponse> = serde_json::from_value(data)?;

        Ok(webhooks
            .into_iter()
            .map(|webhook| Webhook::new(self.clone(), webhook))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PRODUCTION_URL, SANDBOX_URL};

    #[test]
    fn client_creation() {
        let client = Client::new(ClientConfig::new("sk_test")).unwrap();
        assert_eq!(client.base_url(), PRODUCTION_URL);
        assert_eq!(client.api_version(), "2024-09-01");
    }

    #[test]
    fn sandbox_client() {
        let client = Client::new(ClientConfig::new("sk_test").sandbox(true)).unwrap();
        assert_eq!(client.base_url(), SANDBOX_URL);
    }

    #[test]
    fn client_trims_trailing_slash() {
        let config = ClientConfig::new("sk_test").with_base_url("http://localhost:8080/");
        let client = Client::new(config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn clones_share_configuration() {
        let client = Client::new(ClientConfig::new("sk_test")).unwrap();
        let clone = client.clone();
        assert!(Arc::ptr_eq(&client.inner, &clone.inner));
    }

    #[test]
    fn order_handle_needs_no_request() {
        let client = Client::new(ClientConfig::new("sk_test")).unwrap();
        let order = client.order(OrderId::new("abc").unwrap());
        assert_eq!(order.id().as_str(), "abc");
    }

    #[test]
    fn invalid_secret_is_configuration_error() {
        let err = Client::new(ClientConfig::new("sk\r\nInjected: yes")).unwrap_err();
        assert!(matches!(err, ClientError::Configuration(_)));
    }
}
