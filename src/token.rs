//! Bearer-token expiry inspection.
//!
//! The backend issues three-segment dot-separated credentials whose middle
//! segment is base64url-encoded JSON carrying an `exp` claim (Unix seconds).
//! This client never holds a signing secret, so it cannot (and deliberately
//! does not) verify the signature segment; authenticity is the backend's
//! concern. The only check made here is that the token has not expired.

use base64::prelude::*;
use chrono::Utc;
use serde::Deserialize;

use crate::SessionError;

/// Claims this client cares about from the token payload.
///
/// Anything else in the payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenClaims {
    /// Expiration time (Unix timestamp, seconds).
    pub exp: i64,
    /// Subject, if the backend includes one.
    #[serde(default)]
    pub sub: Option<String>,
}

impl TokenClaims {
    /// Returns true if `exp` is strictly in the future.
    pub fn is_fresh(&self) -> bool {
        self.exp > Utc::now().timestamp()
    }
}

/// Decodes the payload segment of a token.
///
/// # Errors
///
/// Any structural failure (wrong segment count, bad base64, bad JSON,
/// missing `exp`) is `SessionError::InvalidCredentialPayload`.
pub fn decode_claims(token: &str) -> Result<TokenClaims, SessionError> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(SessionError::InvalidCredentialPayload);
    };

    let bytes = decode_segment(payload).ok_or(SessionError::InvalidCredentialPayload)?;

    serde_json::from_slice(&bytes).map_err(|_| SessionError::InvalidCredentialPayload)
}

/// Returns true iff the token decodes and has not expired.
///
/// Pure predicate: any failure is `false`, nothing propagates. Signature
/// verification is intentionally absent (see module docs).
pub fn validate(token: &str) -> bool {
    decode_claims(token).map(|c| c.is_fresh()).unwrap_or(false)
}

// Tokens normally use the URL-safe alphabet without padding, but the backend
// is not ours, so the standard alphabet is accepted too.
fn decode_segment(segment: &str) -> Option<Vec<u8>> {
    BASE64_URL_SAFE_NO_PAD
        .decode(segment)
        .or_else(|_| BASE64_STANDARD.decode(segment))
        .or_else(|_| BASE64_STANDARD_NO_PAD.decode(segment))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    /// Builds a structurally valid token with the given payload JSON.
    fn fake_token(payload: &str) -> String {
        let header = BASE64_URL_SAFE_NO_PAD.encode(b"{\"alg\":\"HS256\",\"typ\":\"JWT\"}");
        let body = BASE64_URL_SAFE_NO_PAD.encode(payload.as_bytes());
        format!("{header}.{body}.signature")
    }

    /// Token expiring `offset` from now.
    fn token_expiring_in(offset: Duration) -> String {
        let exp = (Utc::now() + offset).timestamp();
        fake_token(&format!("{{\"exp\":{exp}}}"))
    }

    #[test]
    fn test_future_exp_is_valid() {
        assert!(validate(&token_expiring_in(Duration::hours(1))));
    }

    #[test]
    fn test_past_exp_is_invalid() {
        assert!(!validate(&token_expiring_in(Duration::hours(-1))));
    }

    #[test]
    fn test_wrong_segment_count() {
        assert!(!validate("only-one-segment"));
        assert!(!validate("two.segments"));
        assert!(!validate("a.b.c.d"));
        assert!(!validate(""));
    }

    #[test]
    fn test_non_base64_payload() {
        assert!(!validate("header.!!!not-base64!!!.signature"));
    }

    #[test]
    fn test_non_json_payload() {
        let body = BASE64_URL_SAFE_NO_PAD.encode(b"plain text, not json");
        assert!(!validate(&format!("h.{body}.s")));
    }

    #[test]
    fn test_missing_exp_field() {
        assert!(!validate(&fake_token("{\"sub\":\"42\"}")));
    }

    #[test]
    fn test_standard_alphabet_accepted() {
        let exp = (Utc::now() + Duration::hours(1)).timestamp();
        let body = BASE64_STANDARD.encode(format!("{{\"exp\":{exp}}}").as_bytes());
        assert!(validate(&format!("h.{body}.s")));
    }

    #[test]
    fn test_decode_claims_reads_sub() {
        let exp = (Utc::now() + Duration::hours(1)).timestamp();
        let token = fake_token(&format!("{{\"exp\":{exp},\"sub\":\"42\"}}"));
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.sub.as_deref(), Some("42"));
        assert!(claims.is_fresh());
    }

    #[test]
    fn test_decode_claims_error_kind() {
        let err = decode_claims("garbage").unwrap_err();
        assert_eq!(err, SessionError::InvalidCredentialPayload);
    }
}
