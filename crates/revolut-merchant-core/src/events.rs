//! Webhook event names.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An order event a webhook can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WebhookEvent {
    /// The order was paid and captured.
    OrderCompleted,
    /// The payment was authorised but not yet captured.
    OrderAuthorised,
    /// The order was cancelled.
    OrderCanceled,
}

impl WebhookEvent {
    /// All event variants.
    pub const ALL: [Self; 3] = [
        Self::OrderCompleted,
        Self::OrderAuthorised,
        Self::OrderCanceled,
    ];

    /// The wire name of the event.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OrderCompleted => "ORDER_COMPLETED",
            Self::OrderAuthorised => "ORDER_AUTHORISED",
            Self::OrderCanceled => "ORDER_CANCELED",
        }
    }
}

impl fmt::Display for WebhookEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_wire_names() {
        for event in WebhookEvent::ALL {
            let json = serde_json::to_string(&event).unwrap();
            assert_eq!(json, format!("\"{}\"", event.as_str()));
        }
    }

    #[test]
    fn parses_wire_names() {
        let events: Vec<WebhookEvent> =
            serde_json::from_str(r#"["ORDER_COMPLETED","ORDER_CANCELED"]"#).unwrap();
        assert_eq!(
            events,
            vec![WebhookEvent::OrderCompleted, WebhookEvent::OrderCanceled]
        );
    }

    #[test]
    fn rejects_unknown_names() {
        assert!(serde_json::from_str::<WebhookEvent>("\"ORDER_REFUNDED\"").is_err());
    }
}
