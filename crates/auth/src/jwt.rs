//! JWT issue/validation and token extraction helpers

use axum::http::HeaderValue;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::claims::AdminClaims;
use crate::config::AuthConfig;
use crate::error::AuthError;

/// Issue a signed session token for an authenticated admin.
///
/// Returns the encoded token and its expiry (unix seconds).
pub fn emitir_token(username: &str, config: &AuthConfig) -> Result<(String, u64), AuthError> {
    let agora = Utc::now();
    let expira = agora + Duration::hours(config.token_ttl_horas);

    let claims = AdminClaims {
        sub: username.to_string(),
        iat: agora.timestamp() as u64,
        exp: expira.timestamp() as u64,
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_ref()),
    )
    .map_err(|e| {
        tracing::error!(error = %e, "Failed to encode session token");
        AuthError::TokenCreation
    })?;

    Ok((token, claims.exp))
}

/// Validate a session token and return its claims
pub fn validar_token(token: &str, config: &AuthConfig) -> Result<AdminClaims, AuthError> {
    let validation = Validation::new(Algorithm::HS256);
    let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_ref());

    let token_data = decode::<AdminClaims>(token, &decoding_key, &validation).map_err(|e| {
        tracing::debug!(error = %e, "Session token validation failed");
        AuthError::InvalidToken
    })?;

    Ok(token_data.claims)
}

/// Extract bearer token from Authorization header
pub(crate) fn extract_bearer_token(header: &HeaderValue) -> Result<String, AuthError> {
    let header_str = header
        .to_str()
        .map_err(|_| AuthError::InvalidAuthorizationFormat)?;

    if let Some(token) = header_str.strip_prefix("Bearer ") {
        Ok(token.to_string())
    } else {
        Err(AuthError::InvalidAuthorizationFormat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test_secret_key_for_testing_only".to_string(),
            token_ttl_horas: 8,
        }
    }

    #[test]
    fn test_issue_then_validate_roundtrip() {
        let config = test_config();
        let (token, exp) = emitir_token("admin", &config).unwrap();

        let claims = validar_token(&token, &config).unwrap();
        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.exp, exp);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_validate_rejects_wrong_secret() {
        let config = test_config();
        let (token, _) = emitir_token("admin", &config).unwrap();

        let other = AuthConfig {
            jwt_secret: "a_different_secret".to_string(),
            token_ttl_horas: 8,
        };
        assert!(validar_token(&token, &other).is_err());
    }

    #[test]
    fn test_validate_rejects_garbage() {
        let config = test_config();
        assert!(validar_token("not.a.token", &config).is_err());
    }

    #[test]
    fn test_extract_bearer_token() {
        // Valid bearer token
        let header = HeaderValue::from_static("Bearer abc123");
        let result = extract_bearer_token(&header);
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "abc123");

        // Invalid format
        let header = HeaderValue::from_static("abc123");
        assert!(extract_bearer_token(&header).is_err());

        // Basic auth (wrong type)
        let header = HeaderValue::from_static("Basic abc123");
        assert!(extract_bearer_token(&header).is_err());
    }
}
