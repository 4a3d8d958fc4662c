//! Achados application composition root
//!
//! Composes the Objetos domain router with shared infrastructure routes.

use axum::Router;
use sqlx::PgPool;

use achados_auth::AuthConfig;
use achados_common::Config;
use achados_objetos::{ObjetosRepositories, ObjetosState};

/// Create the main application router with all routes and middleware
pub fn create_app(config: &Config, pool: PgPool) -> Router {
    // Create repositories (explicit pool injection, no ambient state)
    let repos = ObjetosRepositories::new(pool);

    let auth = AuthConfig {
        jwt_secret: config.jwt_secret.clone(),
        token_ttl_horas: config.token_ttl_horas,
    };

    // Create Objetos domain state
    let state = ObjetosState {
        repos,
        auth,
        expiracao_meses: config.expiracao_meses,
    };

    // Build router — compose the domain router with shared infrastructure routes
    Router::new()
        .route("/health", axum::routing::get(health_check))
        .merge(achados_objetos::routes().with_state(state))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
