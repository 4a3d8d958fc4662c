//! Admin review API handlers
//!
//! Every handler takes the `AdminUser` extractor, so requests without a
//! valid bearer token are rejected with 401 before any work happens.
//!
//! Implements:
//! - GET /admin/objetos — List every record, including expired ones
//! - GET /admin/denuncias — List reported records
//! - POST /admin/objetos/{id}/denunciar — Flag a record as reported
//! - POST /admin/objetos/{id}/resolver-denuncia — Resolve a report
//! - DELETE /admin/objetos/{id} — Unconditional delete

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde::Deserialize;

use achados_auth::AdminUser;
use achados_common::{Error, Result};

use super::objetos::{MensagemResponse, ObjetoResponse};
use crate::api::state::ObjetosState;
use crate::domain::entities::AcaoDenuncia;

/// Request for resolving a report
#[derive(Debug, Deserialize)]
pub struct ResolverDenunciaRequest {
    pub acao: Option<String>,
}

/// GET /admin/objetos — List every record, including expired ones,
/// annotated with derived status
pub async fn list_todos(
    _admin: AdminUser,
    State(state): State<ObjetosState>,
) -> Result<Json<Vec<ObjetoResponse>>> {
    let hoje = Utc::now().date_naive();

    let objetos = state
        .repos
        .objetos
        .list_todos()
        .await
        .map_err(|e| Error::Internal(format!("Failed to list records: {}", e)))?;

    let responses = objetos
        .into_iter()
        .map(|o| ObjetoResponse::from_objeto(o, hoje))
        .collect();

    Ok(Json(responses))
}

/// GET /admin/denuncias — List reported records
pub async fn list_denuncias(
    _admin: AdminUser,
    State(state): State<ObjetosState>,
) -> Result<Json<Vec<ObjetoResponse>>> {
    let hoje = Utc::now().date_naive();

    let objetos = state
        .repos
        .objetos
        .list_denunciados()
        .await
        .map_err(|e| Error::Internal(format!("Failed to list reports: {}", e)))?;

    let responses = objetos
        .into_iter()
        .map(|o| ObjetoResponse::from_objeto(o, hoje))
        .collect();

    Ok(Json(responses))
}

/// POST /admin/objetos/{id}/denunciar — Flag a record as reported
pub async fn denunciar(
    _admin: AdminUser,
    State(state): State<ObjetosState>,
    Path(id): Path<i32>,
) -> Result<Json<MensagemResponse>> {
    let existia = state
        .repos
        .objetos
        .marcar_denuncia(id)
        .await
        .map_err(|e| Error::Internal(format!("Failed to flag record: {}", e)))?;

    if !existia {
        return Err(Error::NotFound("Objeto não encontrado".to_string()));
    }

    Ok(Json(MensagemResponse {
        mensagem: "Objeto denunciado para revisão",
    }))
}

/// POST /admin/objetos/{id}/resolver-denuncia — Resolve a report
///
/// `aprovar` upholds the report and deletes the record; `rejeitar` clears
/// both flags (idempotent on already-clean records). Any other action
/// answers 400 before the store is touched.
pub async fn resolver_denuncia(
    admin: AdminUser,
    State(state): State<ObjetosState>,
    Path(id): Path<i32>,
    Json(request): Json<ResolverDenunciaRequest>,
) -> Result<Json<MensagemResponse>> {
    let acao: AcaoDenuncia = request
        .acao
        .as_deref()
        .ok_or_else(|| Error::MissingField("acao".to_string()))?
        .parse()?;

    let (existia, mensagem) = match acao {
        AcaoDenuncia::Aprovar => {
            let existia = state
                .repos
                .objetos
                .delete(id)
                .await
                .map_err(|e| Error::Internal(format!("Failed to delete record: {}", e)))?;
            (existia, "Denúncia aprovada: objeto removido")
        }
        AcaoDenuncia::Rejeitar => {
            let existia = state
                .repos
                .objetos
                .limpar_denuncia(id)
                .await
                .map_err(|e| Error::Internal(format!("Failed to clear report: {}", e)))?;
            (existia, "Denúncia rejeitada: objeto mantido")
        }
    };

    if !existia {
        return Err(Error::NotFound("Objeto não encontrado".to_string()));
    }

    tracing::info!(id, admin = %admin.0.sub, acao = ?acao, "Denúncia resolvida");

    Ok(Json(MensagemResponse { mensagem }))
}

/// DELETE /admin/objetos/{id} — Unconditional delete
pub async fn remover_objeto(
    admin: AdminUser,
    State(state): State<ObjetosState>,
    Path(id): Path<i32>,
) -> Result<Json<MensagemResponse>> {
    let existia = state
        .repos
        .objetos
        .delete(id)
        .await
        .map_err(|e| Error::Internal(format!("Failed to delete record: {}", e)))?;

    if !existia {
        return Err(Error::NotFound("Objeto não encontrado".to_string()));
    }

    tracing::info!(id, admin = %admin.0.sub, "Objeto removido pela administração");

    Ok(Json(MensagemResponse {
        mensagem: "Objeto removido com sucesso",
    }))
}
