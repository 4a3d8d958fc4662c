//! Public object API handlers
//!
//! This module implements the lost-item CRUD operations: listing and
//! fetching records annotated with their derived status, anonymous creation,
//! and owner-authenticated update/delete guarded by the palavra-passe.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use achados_common::{Error, Result};

use crate::api::state::ObjetosState;
use crate::domain::entities::{DadosCriacao, NovoObjeto, Objeto, StatusObjeto};
use crate::domain::validation;

/// Request for creating a new record.
///
/// All fields are optional at the serde level so that missing required
/// fields surface as the domain's `MISSING_FIELD` error instead of a
/// deserialization rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateObjetoRequest {
    pub titulo: Option<String>,
    pub categoria: Option<String>,
    pub descricao: Option<String>,
    pub local: Option<String>,
    pub palavra_passe: Option<String>,
    #[serde(alias = "foto")]
    pub imagem: Option<String>,
    #[serde(alias = "contatoInstagram")]
    pub instagram: Option<String>,
    #[serde(alias = "whatsapp", alias = "contatoWhatsapp")]
    pub contato: Option<String>,
}

/// Request for updating a record: the owner secret plus any subset of the
/// mutable fields. Absent fields retain their prior values.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateObjetoRequest {
    pub palavra_passe: Option<String>,
    pub titulo: Option<String>,
    pub categoria: Option<String>,
    pub descricao: Option<String>,
    pub local: Option<String>,
    #[serde(alias = "foto")]
    pub imagem: Option<String>,
    #[serde(alias = "contatoInstagram")]
    pub instagram: Option<String>,
    #[serde(alias = "whatsapp", alias = "contatoWhatsapp")]
    pub contato: Option<String>,
}

impl UpdateObjetoRequest {
    /// Whether any mutable field was supplied
    pub fn tem_campos(&self) -> bool {
        self.titulo.is_some()
            || self.categoria.is_some()
            || self.descricao.is_some()
            || self.local.is_some()
            || self.imagem.is_some()
            || self.instagram.is_some()
            || self.contato.is_some()
    }
}

/// Request carrying only the owner secret (delete / validate)
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PalavraPasseRequest {
    pub palavra_passe: Option<String>,
}

/// Record response for API operations, annotated with the derived status
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjetoResponse {
    pub id: i32,
    pub titulo: String,
    pub categoria: String,
    pub descricao: Option<String>,
    pub local: String,
    pub data_registro: NaiveDate,
    pub data_expiracao: NaiveDate,
    pub foto: Option<String>,
    pub contato_instagram: Option<String>,
    pub contato_whatsapp: Option<String>,
    pub denuncia: bool,
    pub status_denuncia: bool,
    /// Derived per read; never persisted
    pub status: StatusObjeto,
}

impl ObjetoResponse {
    /// Convert a stored record to response format, deriving its status
    pub fn from_objeto(objeto: Objeto, hoje: NaiveDate) -> Self {
        let status = objeto.status(hoje);
        Self {
            id: objeto.id,
            titulo: objeto.titulo,
            categoria: objeto.categoria,
            descricao: objeto.descricao,
            local: objeto.local,
            data_registro: objeto.data_registro,
            data_expiracao: objeto.data_expiracao,
            foto: objeto.foto,
            contato_instagram: objeto.contato_instagram,
            contato_whatsapp: objeto.contato_whatsapp,
            denuncia: objeto.denuncia,
            status_denuncia: objeto.status_denuncia,
            status,
        }
    }
}

/// Response for a successful creation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateObjetoResponse {
    pub id: i32,
    pub titulo: String,
    pub data_expiracao: NaiveDate,
    pub status: StatusObjeto,
    pub mensagem: &'static str,
}

/// Plain message response
#[derive(Debug, Serialize)]
pub struct MensagemResponse {
    pub mensagem: &'static str,
}

/// Response for `POST /objetos/{id}/validar`
#[derive(Debug, Serialize)]
pub struct ValidarResponse {
    pub valido: bool,
}

/// List active records
///
/// **GET /objetos**
///
/// Returns all non-expired records ordered by registration date descending,
/// each annotated with its derived status.
pub async fn list_objetos(
    State(state): State<ObjetosState>,
) -> Result<Json<Vec<ObjetoResponse>>> {
    let hoje = Utc::now().date_naive();

    let objetos = state
        .repos
        .objetos
        .list_nao_expirados(hoje)
        .await
        .map_err(|e| Error::Internal(format!("Failed to list records: {}", e)))?;

    let responses = objetos
        .into_iter()
        .map(|o| ObjetoResponse::from_objeto(o, hoje))
        .collect();

    Ok(Json(responses))
}

/// List active records filtered by location and category
///
/// **GET /objetos/local/{local}/categoria/{categoria}**
///
/// Case-insensitive exact match on both path segments.
pub async fn list_objetos_filtrado(
    State(state): State<ObjetosState>,
    Path((local, categoria)): Path<(String, String)>,
) -> Result<Json<Vec<ObjetoResponse>>> {
    let hoje = Utc::now().date_naive();

    let objetos = state
        .repos
        .objetos
        .list_por_local_categoria(&local, &categoria, hoje)
        .await
        .map_err(|e| Error::Internal(format!("Failed to filter records: {}", e)))?;

    let responses = objetos
        .into_iter()
        .map(|o| ObjetoResponse::from_objeto(o, hoje))
        .collect();

    Ok(Json(responses))
}

/// Get a record by id
///
/// **GET /objetos/{id}**
pub async fn get_objeto(
    State(state): State<ObjetosState>,
    Path(id): Path<i32>,
) -> Result<Json<ObjetoResponse>> {
    let hoje = Utc::now().date_naive();

    let objeto = state
        .repos
        .objetos
        .get_by_id(id)
        .await
        .map_err(|e| Error::Internal(format!("Failed to get record: {}", e)))?
        .ok_or_else(|| Error::NotFound("Objeto não encontrado".to_string()))?;

    Ok(Json(ObjetoResponse::from_objeto(objeto, hoje)))
}

/// Create a new record
///
/// **POST /objetos**
///
/// Validates required fields and the at-least-one-contact rule, computes
/// the expiration date, hashes the owner secret with a fresh salt, and
/// persists with both report flags unset.
pub async fn create_objeto(
    State(state): State<ObjetosState>,
    Json(request): Json<CreateObjetoRequest>,
) -> Result<(StatusCode, Json<CreateObjetoResponse>)> {
    let hoje = Utc::now().date_naive();

    let dados = DadosCriacao {
        titulo: request.titulo.unwrap_or_default(),
        categoria: request.categoria.unwrap_or_default(),
        descricao: request.descricao,
        local: request.local.unwrap_or_default(),
        palavra_passe: request.palavra_passe.unwrap_or_default(),
        foto: request.imagem,
        contato_instagram: request.instagram,
        contato_whatsapp: request.contato,
    };

    let novo = NovoObjeto::criar(dados, hoje, state.expiracao_meses)?;

    let objeto = state
        .repos
        .objetos
        .create(&novo)
        .await
        .map_err(|e| Error::Internal(format!("Failed to create record: {}", e)))?;

    tracing::info!(id = objeto.id, "Objeto registrado");

    let status = objeto.status(hoje);
    let response = CreateObjetoResponse {
        id: objeto.id,
        titulo: objeto.titulo,
        data_expiracao: objeto.data_expiracao,
        status,
        mensagem:
            "Objeto registrado. Guarde a palavra-passe: ela é exigida para editar ou remover o registro.",
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Update a record (owner-authenticated)
///
/// **PUT /objetos/{id}**
///
/// Requires the matching palavra-passe; applies only the fields present in
/// the request. Rejects updates that supply no mutable field, and updates
/// that would leave the record with no contact method.
pub async fn update_objeto(
    State(state): State<ObjetosState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateObjetoRequest>,
) -> Result<Json<ObjetoResponse>> {
    let hoje = Utc::now().date_naive();

    let palavra_passe = request
        .palavra_passe
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .ok_or_else(|| Error::MissingField("palavraPasse".to_string()))?;

    if !request.tem_campos() {
        return Err(Error::Validation(
            "Nenhum campo atualizável informado".to_string(),
        ));
    }

    let mut objeto = state
        .repos
        .objetos
        .get_by_id(id)
        .await
        .map_err(|e| Error::Internal(format!("Failed to get record: {}", e)))?
        .ok_or_else(|| Error::NotFound("Objeto não encontrado".to_string()))?;

    if !objeto.verificar_palavra_passe(palavra_passe) {
        return Err(Error::Authentication("Palavra-passe incorreta".to_string()));
    }

    // Apply updates; required text fields may not become empty
    if let Some(titulo) = request.titulo {
        let titulo = titulo.trim().to_string();
        if titulo.is_empty() {
            return Err(Error::MissingField("titulo".to_string()));
        }
        objeto.titulo = titulo;
    }

    if let Some(categoria) = request.categoria {
        let categoria = categoria.trim().to_string();
        if categoria.is_empty() {
            return Err(Error::MissingField("categoria".to_string()));
        }
        objeto.categoria = categoria;
    }

    if let Some(local) = request.local {
        let local = local.trim().to_string();
        if local.is_empty() {
            return Err(Error::MissingField("local".to_string()));
        }
        objeto.local = local;
    }

    if let Some(descricao) = request.descricao {
        objeto.descricao = validation::normalizar(Some(descricao));
    }

    if let Some(imagem) = request.imagem {
        objeto.foto = validation::normalizar(Some(imagem));
    }

    // An empty-string contact clears that method; the record must still end
    // up with at least one, and WhatsApp contacts must keep a valid format
    if let Some(instagram) = request.instagram {
        objeto.contato_instagram = validation::normalizar(Some(instagram));
    }

    if let Some(contato) = request.contato {
        objeto.contato_whatsapp = validation::normalizar(Some(contato));
    }

    validation::validar_contato(
        objeto.contato_instagram.as_deref(),
        objeto.contato_whatsapp.as_deref(),
    )?;

    let atualizado = state
        .repos
        .objetos
        .update(&objeto)
        .await
        .map_err(|e| Error::Internal(format!("Failed to update record: {}", e)))?;

    Ok(Json(ObjetoResponse::from_objeto(atualizado, hoje)))
}

/// Delete a record (owner-authenticated)
///
/// **DELETE /objetos/{id}**
///
/// Body carries the palavra-passe. Unknown ids answer 404; a wrong secret
/// answers 401 and leaves the record untouched.
pub async fn delete_objeto(
    State(state): State<ObjetosState>,
    Path(id): Path<i32>,
    Json(request): Json<PalavraPasseRequest>,
) -> Result<Json<MensagemResponse>> {
    let palavra_passe = request
        .palavra_passe
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .ok_or_else(|| Error::MissingField("palavraPasse".to_string()))?;

    let objeto = state
        .repos
        .objetos
        .get_by_id(id)
        .await
        .map_err(|e| Error::Internal(format!("Failed to get record: {}", e)))?
        .ok_or_else(|| Error::NotFound("Objeto não encontrado".to_string()))?;

    if !objeto.verificar_palavra_passe(palavra_passe) {
        return Err(Error::Authentication("Palavra-passe incorreta".to_string()));
    }

    state
        .repos
        .objetos
        .delete(id)
        .await
        .map_err(|e| Error::Internal(format!("Failed to delete record: {}", e)))?;

    tracing::info!(id, "Objeto removido pelo dono");

    Ok(Json(MensagemResponse {
        mensagem: "Objeto removido com sucesso",
    }))
}

/// Check an owner secret without mutating anything
///
/// **POST /objetos/{id}/validar**
pub async fn validar_palavra_passe(
    State(state): State<ObjetosState>,
    Path(id): Path<i32>,
    Json(request): Json<PalavraPasseRequest>,
) -> Result<Json<ValidarResponse>> {
    let palavra_passe = request
        .palavra_passe
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .ok_or_else(|| Error::MissingField("palavraPasse".to_string()))?;

    let objeto = state
        .repos
        .objetos
        .get_by_id(id)
        .await
        .map_err(|e| Error::Internal(format!("Failed to get record: {}", e)))?
        .ok_or_else(|| Error::NotFound("Objeto não encontrado".to_string()))?;

    Ok(Json(ValidarResponse {
        valido: objeto.verificar_palavra_passe(palavra_passe),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_tem_campos() {
        let vazio = UpdateObjetoRequest {
            palavra_passe: Some("1234".to_string()),
            ..Default::default()
        };
        assert!(!vazio.tem_campos());

        let com_titulo = UpdateObjetoRequest {
            palavra_passe: Some("1234".to_string()),
            titulo: Some("Chave".to_string()),
            ..Default::default()
        };
        assert!(com_titulo.tem_campos());

        let so_contato = UpdateObjetoRequest {
            contato: Some("38999990000".to_string()),
            ..Default::default()
        };
        assert!(so_contato.tem_campos());
    }

    #[test]
    fn test_create_request_aliases() {
        let json = serde_json::json!({
            "titulo": "Mochila",
            "categoria": "Bolsas",
            "local": "Bloco B",
            "palavraPasse": "abcd",
            "foto": "https://example.com/m.jpg",
            "contatoInstagram": "@ana",
            "whatsapp": "38 98888-0000"
        });

        let request: CreateObjetoRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.imagem.as_deref(), Some("https://example.com/m.jpg"));
        assert_eq!(request.instagram.as_deref(), Some("@ana"));
        assert_eq!(request.contato.as_deref(), Some("38 98888-0000"));
    }

    #[test]
    fn test_objeto_response_annotates_status() {
        let hoje = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let objeto = Objeto {
            id: 1,
            titulo: "Chave".to_string(),
            categoria: "Chaves".to_string(),
            descricao: None,
            local: "Bloco A".to_string(),
            data_registro: hoje,
            data_expiracao: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            foto: None,
            palavra_passe_hash: "salt:hash".to_string(),
            contato_instagram: Some("@joao".to_string()),
            contato_whatsapp: None,
            denuncia: false,
            status_denuncia: false,
        };

        let response = ObjetoResponse::from_objeto(objeto, hoje);
        assert_eq!(response.status, StatusObjeto::Expirado);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "expirado");
        assert!(json.get("palavraPasseHash").is_none());
    }
}
