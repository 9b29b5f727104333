//! Webhook signature verification.
//!
//! Revolut signs each webhook delivery with HMAC-SHA256 over the raw request
//! body, keyed by the webhook's signing secret, and sends the hex digest.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// A MAC keyed by `secret` that has absorbed `raw_body`.
fn body_mac(secret: &str, raw_body: &[u8]) -> HmacSha256 {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC takes keys of any length");
    mac.update(raw_body);
    mac
}

/// Compute the hex-encoded HMAC-SHA256 of `raw_body` keyed by `secret`.
#[must_use]
pub fn webhook_signature(secret: &str, raw_body: &[u8]) -> String {
    hex::encode(body_mac(secret, raw_body).finalize().into_bytes())
}

/// Check that `signature` is the HMAC-SHA256 hex digest of `raw_body` under `secret`.
///
/// The digest comparison is constant-time. Signatures that are not valid hex
/// or have the wrong length are rejected.
#[must_use]
pub fn is_valid_webhook(secret: &str, raw_body: &[u8], signature: &str) -> bool {
    let Ok(expected) = hex::decode(signature) else {
        return false;
    };
    body_mac(secret, raw_body).verify_slice(&expected).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "wsk_r59a4HfWVAKycbCaNO1RvgCJec02gRd8";
    const BODY: &[u8] = br#"{"event":"ORDER_COMPLETED","order_id":"9fc01989-3f61-4484-a5d9-ffe768531be9"}"#;

    #[test]
    fn rfc_4231_test_case_2() {
        assert_eq!(
            webhook_signature("Jefe", b"what do ya want for nothing?"),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn accepts_correct_signature() {
        let signature = webhook_signature(SECRET, BODY);
        assert_eq!(signature.len(), 64);
        assert!(is_valid_webhook(SECRET, BODY, &signature));
        assert!(is_valid_webhook(SECRET, BODY, &signature.to_uppercase()));
    }

    #[test]
    fn rejects_any_single_bit_flip_in_body() {
        let signature = webhook_signature(SECRET, BODY);
        for byte in 0..BODY.len() {
            for bit in 0..8 {
                let mut body = BODY.to_vec();
                body[byte] ^= 1 << bit;
                assert!(
                    !is_valid_webhook(SECRET, &body, &signature),
                    "flip at byte {byte} bit {bit} accepted"
                );
            }
        }
    }

    #[test]
    fn rejects_any_single_bit_flip_in_signature() {
        let signature = webhook_signature(SECRET, BODY);
        let mut digest = hex::decode(&signature).unwrap();
        for byte in 0..digest.len() {
            for bit in 0..8 {
                digest[byte] ^= 1 << bit;
                assert!(!is_valid_webhook(SECRET, BODY, &hex::encode(&digest)));
                digest[byte] ^= 1 << bit;
            }
        }
    }

    #[test]
    fn rejects_wrong_secret() {
        let signature = webhook_signature(SECRET, BODY);
        assert!(!is_valid_webhook("wsk_other", BODY, &signature));
    }

    #[test]
    fn rejects_malformed_signatures() {
        let signature = webhook_signature(SECRET, BODY);
        assert!(!is_valid_webhook(SECRET, BODY, ""));
        assert!(!is_valid_webhook(SECRET, BODY, "not-hex"));
        assert!(!is_valid_webhook(SECRET, BODY, &signature[..62]));
        assert!(!is_valid_webhook(SECRET, BODY, &format!("{signature}00")));
    }
}
