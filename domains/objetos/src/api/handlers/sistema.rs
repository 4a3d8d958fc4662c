//! Service info handler
//!
//! Implements:
//! - GET / — Service description plus store reachability

use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::state::ObjetosState;

/// Response shape for `GET /`
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub descricao: &'static str,
    pub versao: &'static str,
    pub banco: &'static str,
}

/// GET / — Service info probe; pings the store and reports its reachability
pub async fn info(State(state): State<ObjetosState>) -> Json<InfoResponse> {
    let banco = match state.repos.ping().await {
        Ok(()) => "ok",
        Err(e) => {
            tracing::warn!(error = %e, "Store ping failed");
            "indisponivel"
        }
    };

    Json(InfoResponse {
        descricao: "API para plataforma de achados e perdidos no campus",
        versao: env!("CARGO_PKG_VERSION"),
        banco,
    })
}
