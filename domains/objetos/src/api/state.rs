//! Objetos domain state

use axum::extract::FromRef;

use achados_auth::AuthConfig;

use crate::repository::ObjetosRepositories;

/// Application state for the Objetos domain
#[derive(Clone)]
pub struct ObjetosState {
    pub repos: ObjetosRepositories,
    pub auth: AuthConfig,
    /// Months until a newly registered record expires
    pub expiracao_meses: u32,
}

impl FromRef<ObjetosState> for AuthConfig {
    fn from_ref(state: &ObjetosState) -> Self {
        state.auth.clone()
    }
}
