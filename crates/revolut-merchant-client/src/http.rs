//! Single request executor.
//!
//! Sends one request, decodes the JSON body and classifies the outcome by
//! status code. Typed wrapping happens one layer up.

use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::ClientError;

/// Message used when an error body has no `message` field.
const UNKNOWN_MESSAGE: &str = "Unknown";

/// Send `method base_url+path` and return the decoded JSON body.
pub(crate) async fn execute<B>(
    http: &reqwest::Client,
    base_url: &str,
    method: Method,
    path: &str,
    headers: &HeaderMap,
    body: Option<&B>,
) -> Result<Value, ClientError>
where
    B: Serialize + ?Sized,
{
    debug_assert!(path.starts_with('/'), "path must start with '/': {path}");
    let url = format!("{base_url}{path}");

    debug!(method = %method, path = %path, "Sending Revolut request");

    let mut request = http.request(method.clone(), &url).headers(headers.clone());
    if let Some(body) = body {
        request = request.json(body);
    }

    let response = request.send().await?;
    let status = response.status();
    let bytes = response.bytes().await?;

    let result = classify(status, &bytes);
    match &result {
        Ok(_) => debug!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            "Revolut request succeeded"
        ),
        Err(ClientError::Api { status, message }) => warn!(
            method = %method,
            path = %path,
            status,
            message = %message,
            "Revolut API error"
        ),
        Err(e) => warn!(
            method = %method,
            path = %path,
            error = %e,
            "Revolut response could not be decoded"
        ),
    }
    result
}

/// Decode a response body and map error statuses to [`ClientError::Api`].
///
/// Only `204 No Content` may have an empty body; it decodes to `null`.
pub(crate) fn classify(status: StatusCode, body: &[u8]) -> Result<Value, ClientError> {
    let value = if status == StatusCode::NO_CONTENT && body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(body).map_err(|_| ClientError::Decode)?
    };

    if status.as_u16() >= 400 {
        let message = value
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_MESSAGE)
            .to_string();
        return Err(ClientError::Api {
            status: status.as_u16(),
            message,
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_returns_body_as_is() {
        let value = classify(StatusCode::OK, br#"{"id":"abc","state":"pending"}"#).unwrap();
        assert_eq!(value, json!({"id": "abc", "state": "pending"}));

        let list = classify(StatusCode::OK, br#"[{"id":"a"},{"id":"b"}]"#).unwrap();
        assert_eq!(list.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn error_status_carries_message() {
        let err = classify(StatusCode::BAD_REQUEST, br#"{"message":"Invalid currency"}"#).unwrap_err();
        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Invalid currency");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn error_without_message_is_unknown() {
        let err = classify(StatusCode::NOT_FOUND, br#"{"code":"not_found"}"#).unwrap_err();
        assert!(matches!(
            err,
            ClientError::Api { status: 404, ref message } if message == "Unknown"
        ));
    }

    #[test]
    fn non_json_body_is_decode_error() {
        assert!(matches!(
            classify(StatusCode::OK, b"<html>oops</html>"),
            Err(ClientError::Decode)
        ));
        assert!(matches!(
            classify(StatusCode::BAD_GATEWAY, b"Bad Gateway"),
            Err(ClientError::Decode)
        ));
    }

    #[test]
    fn no_content_is_null() {
        assert_eq!(classify(StatusCode::NO_CONTENT, b"").unwrap(), Value::Null);
    }

    #[test]
    fn empty_body_with_content_status_is_decode_error() {
        assert!(matches!(classify(StatusCode::OK, b""), Err(ClientError::Decode)));
        assert!(matches!(classify(StatusCode::OK, b"  "), Err(ClientError::Decode)));
        assert!(matches!(
            classify(StatusCode::BAD_GATEWAY, b"  "),
            Err(ClientError::Decode)
        ));
        assert!(matches!(
            classify(StatusCode::INTERNAL_SERVER_ERROR, b""),
            Err(ClientError::Decode)
        ));
    }
}
