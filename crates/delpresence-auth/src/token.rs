//! Unverified claim decoding.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use crate::claims::Claims;
use crate::error::AuthError;

/// Decodes the claims of `token` without checking its signature or expiry.
pub fn decode_unverified(token: &str) -> Result<Claims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    decode::<Claims>(token.trim(), &DecodingKey::from_secret(&[]), &validation)
        .map(|data| data.claims)
        .map_err(|e| AuthError::InvalidToken(e.to_string()))
}

/// Fails with [`AuthError::TokenExpired`] when the token's `exp` has passed.
///
/// Tokens whose claims cannot be decoded are passed through; the backend
/// decides what to do with them.
pub fn check_not_expired(token: &str, now: DateTime<Utc>) -> Result<(), AuthError> {
    match decode_unverified(token) {
        Ok(claims) if claims.is_expired_at(now) => Err(AuthError::TokenExpired),
        Ok(_) => Ok(()),
        Err(error) => {
            tracing::debug!(%error, "token claims not decodable; skipping expiry check");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde_json::json;

    fn make_token(exp: i64) -> String {
        encode(
            &Header::default(),
            &json!({ "user_id": 3, "username": "admin", "role": "Admin", "exp": exp }),
            &EncodingKey::from_secret(b"server-side-secret"),
        )
        .unwrap()
    }

    #[test]
    fn test_decode_unverified_reads_claims() {
        let claims = decode_unverified(&make_token(4_000_000_000)).unwrap();
        assert_eq!(claims.user_id, Some(3));
        assert_eq!(claims.username.as_deref(), Some("admin"));
        assert_eq!(claims.exp, 4_000_000_000);
    }

    #[test]
    fn test_decode_unverified_rejects_garbage() {
        assert!(matches!(
            decode_unverified("not-a-token"),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_check_not_expired() {
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        assert!(check_not_expired(&make_token(1_700_000_100), now).is_ok());
        assert!(matches!(
            check_not_expired(&make_token(1_699_999_000), now),
            Err(AuthError::TokenExpired)
        ));
    }

    #[test]
    fn test_check_not_expired_ignores_opaque_tokens() {
        let now = Utc::now();
        assert!(check_not_expired("opaque-api-key", now).is_ok());
    }
}
