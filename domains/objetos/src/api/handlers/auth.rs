//! Admin login handler
//!
//! Implements:
//! - POST /login — Verify credentials against the admins table and issue a
//!   signed session token

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use achados_auth::emitir_token;
use achados_common::{Error, Result};

use crate::api::state::ObjetosState;

/// Request for admin login
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "username é obrigatório"))]
    pub username: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "password é obrigatório"))]
    pub password: String,
}

/// Response shape for `POST /login`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    /// Token expiry, unix seconds
    pub expira_em: u64,
}

/// POST /login — Admin login
///
/// Answers a uniform 401 for unknown usernames and wrong passwords so the
/// endpoint cannot be used to enumerate admin accounts.
pub async fn login(
    State(state): State<ObjetosState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    request
        .validate()
        .map_err(|e| Error::Validation(format!("Validation failed: {}", e)))?;

    let admin = state
        .repos
        .admins
        .get_by_username(request.username.trim())
        .await
        .map_err(|e| Error::Internal(format!("Failed to load admin: {}", e)))?
        .ok_or_else(|| Error::Authentication("Credenciais inválidas".to_string()))?;

    if !admin.verificar_senha(&request.password) {
        return Err(Error::Authentication("Credenciais inválidas".to_string()));
    }

    let (token, expira_em) = emitir_token(&admin.username, &state.auth)
        .map_err(|_| Error::Internal("Failed to issue session token".to_string()))?;

    tracing::info!(username = %admin.username, "Admin autenticado");

    Ok(Json(LoginResponse { token, expira_em }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_validation() {
        let vazio = LoginRequest {
            username: String::new(),
            password: String::new(),
        };
        assert!(vazio.validate().is_err());

        let valido = LoginRequest {
            username: "admin".to_string(),
            password: "senha-forte".to_string(),
        };
        assert!(valido.validate().is_ok());
    }

    #[test]
    fn test_login_request_defaults_missing_fields() {
        // Absent fields deserialize to empty strings and fail validation
        // instead of rejecting the body outright
        let request: LoginRequest = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(request.validate().is_err());
    }
}
