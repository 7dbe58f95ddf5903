//! # Webhook Signature Verification
//!
//! Every webhook delivery carries an `X-Line-Signature` header holding the
//! base64-encoded HMAC-SHA256 of the raw request body, keyed with the
//! channel secret. Verification must run on the exact bytes received,
//! before any JSON decoding.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SignatureError {
    #[error("missing signature header")]
    MissingSignature,

    #[error("invalid channel secret")]
    InvalidKey,

    #[error("signature mismatch")]
    Mismatch,
}

/// Check the signature header against the raw body.
pub fn verify(
    channel_secret: &str,
    body: &[u8],
    signature: Option<&str>,
) -> Result<(), SignatureError> {
    let signature = signature.ok_or(SignatureError::MissingSignature)?;

    let mut mac = Hmac::<Sha256>::new_from_slice(channel_secret.as_bytes())
        .map_err(|_| SignatureError::InvalidKey)?;
    mac.update(body);
    let expected = STANDARD.encode(mac.finalize().into_bytes());

    if constant_time_eq(expected.as_bytes(), signature.as_bytes()) {
        Ok(())
    } else {
        Err(SignatureError::Mismatch)
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut res = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        res |= x ^ y;
    }
    res == 0
}

/// Compute the header value a genuine delivery would carry.
#[cfg(test)]
pub(crate) fn sign(channel_secret: &str, body: &[u8]) -> String {
    let mut mac = Hmac::<Sha256>::new_from_slice(channel_secret.as_bytes()).unwrap();
    mac.update(body);
    STANDARD.encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verifies_correctly_signed_body() {
        let secret = "test-channel-secret";
        let body = br#"{"events":[]}"#;
        let signature = sign(secret, body);

        verify(secret, body, Some(&signature)).expect("signature should verify");
    }

    #[test]
    fn test_rejects_tampered_body() {
        let secret = "test-channel-secret";
        let signature = sign(secret, br#"{"events":[]}"#);

        let err = verify(secret, br#"{"events":[{}]}"#, Some(&signature)).unwrap_err();
        assert!(matches!(err, SignatureError::Mismatch));
    }

    #[test]
    fn test_rejects_wrong_secret() {
        let body = br#"{"events":[]}"#;
        let signature = sign("one-secret", body);

        let err = verify("another-secret", body, Some(&signature)).unwrap_err();
        assert!(matches!(err, SignatureError::Mismatch));
    }

    #[test]
    fn test_rejects_missing_header() {
        let err = verify("secret", b"{}", None).unwrap_err();
        assert!(matches!(err, SignatureError::MissingSignature));
    }
}
