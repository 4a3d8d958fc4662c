//! Authentication configuration

/// Authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    /// Session token lifetime, in hours
    pub token_ttl_horas: i64,
}
