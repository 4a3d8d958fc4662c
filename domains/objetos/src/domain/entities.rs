//! Domain entities for the Objetos domain
//!
//! Lost-item records (`Objeto`), their derived lifecycle status, the
//! denuncia review actions, and the admin credential entity. Each entity
//! validates on construction and never exposes stored secret hashes in
//! serialized form.

use chrono::{DateTime, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use achados_common::{hash_secret, verify_secret_hash, Error, Result};

use crate::domain::validation;

/// Records expiring within this many days are annotated `expirando`
pub const JANELA_EXPIRANDO_DIAS: i64 = 7;

/// Derived lifecycle status of a record. Never persisted; computed per read
/// from the expiration date and the current date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusObjeto {
    Ativo,
    Expirando,
    Expirado,
}

impl StatusObjeto {
    /// Derive the status of a record from its expiration date.
    ///
    /// Expired if strictly past; expiring if within the window (inclusive);
    /// otherwise active. Pure and deterministic.
    pub fn derivar(data_expiracao: NaiveDate, hoje: NaiveDate) -> Self {
        if data_expiracao < hoje {
            StatusObjeto::Expirado
        } else if (data_expiracao - hoje).num_days() <= JANELA_EXPIRANDO_DIAS {
            StatusObjeto::Expirando
        } else {
            StatusObjeto::Ativo
        }
    }
}

impl std::fmt::Display for StatusObjeto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusObjeto::Ativo => write!(f, "ativo"),
            StatusObjeto::Expirando => write!(f, "expirando"),
            StatusObjeto::Expirado => write!(f, "expirado"),
        }
    }
}

/// Lost-item record as persisted
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Objeto {
    pub id: i32,
    pub titulo: String,
    pub categoria: String,
    pub descricao: Option<String>,
    pub local: String,
    pub data_registro: NaiveDate,
    pub data_expiracao: NaiveDate,
    pub foto: Option<String>,
    /// Salted hash of the owner secret; never serialized
    #[serde(skip_serializing)]
    pub palavra_passe_hash: String,
    pub contato_instagram: Option<String>,
    pub contato_whatsapp: Option<String>,
    pub denuncia: bool,
    pub status_denuncia: bool,
}

impl Objeto {
    /// Derived status relative to `hoje`
    pub fn status(&self, hoje: NaiveDate) -> StatusObjeto {
        StatusObjeto::derivar(self.data_expiracao, hoje)
    }

    /// Verify a candidate owner secret against the stored salted hash
    pub fn verificar_palavra_passe(&self, candidata: &str) -> bool {
        verify_secret_hash(candidata.trim(), &self.palavra_passe_hash)
    }
}

/// Raw creation input, as supplied by the caller (before validation)
#[derive(Debug, Clone, Default)]
pub struct DadosCriacao {
    pub titulo: String,
    pub categoria: String,
    pub descricao: Option<String>,
    pub local: String,
    pub palavra_passe: String,
    pub foto: Option<String>,
    pub contato_instagram: Option<String>,
    pub contato_whatsapp: Option<String>,
}

/// A validated record ready to insert
#[derive(Debug, Clone)]
pub struct NovoObjeto {
    pub titulo: String,
    pub categoria: String,
    pub descricao: Option<String>,
    pub local: String,
    pub data_registro: NaiveDate,
    pub data_expiracao: NaiveDate,
    pub foto: Option<String>,
    pub palavra_passe_hash: String,
    pub contato_instagram: Option<String>,
    pub contato_whatsapp: Option<String>,
}

impl NovoObjeto {
    /// Validate creation input and build an insertable record.
    ///
    /// Trims all text fields, hashes the owner secret with a fresh salt, and
    /// computes `data_expiracao = hoje + expiracao_meses`. Fails with
    /// `MissingField` / `MissingContact` / `Validation` per the validation
    /// rules; side-effect-free apart from salt generation.
    pub fn criar(dados: DadosCriacao, hoje: NaiveDate, expiracao_meses: u32) -> Result<Self> {
        validation::validar_criacao(&dados)?;

        let data_expiracao = hoje + Months::new(expiracao_meses);

        Ok(NovoObjeto {
            titulo: dados.titulo.trim().to_string(),
            categoria: dados.categoria.trim().to_string(),
            descricao: validation::normalizar(dados.descricao),
            local: dados.local.trim().to_string(),
            data_registro: hoje,
            data_expiracao,
            foto: validation::normalizar(dados.foto),
            palavra_passe_hash: hash_secret(dados.palavra_passe.trim()),
            contato_instagram: validation::normalizar(dados.contato_instagram),
            contato_whatsapp: validation::normalizar(dados.contato_whatsapp),
        })
    }
}

/// Administrative resolution for a reported record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AcaoDenuncia {
    /// Uphold the report and remove the record
    Aprovar,
    /// Dismiss the report and clear both flags
    Rejeitar,
}

impl FromStr for AcaoDenuncia {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "aprovar" => Ok(AcaoDenuncia::Aprovar),
            "rejeitar" => Ok(AcaoDenuncia::Rejeitar),
            other => Err(Error::InvalidAction(other.to_string())),
        }
    }
}

/// Admin credential entity
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Admin {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl Admin {
    /// Create a new admin credential with validation
    pub fn novo(username: &str, senha: &str) -> Result<Self> {
        let username = username.trim();
        if username.is_empty() {
            return Err(Error::MissingField("username".to_string()));
        }
        if senha.len() < 8 {
            return Err(Error::Validation(
                "Password must be at least 8 characters".to_string(),
            ));
        }

        Ok(Admin {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash: hash_secret(senha),
            created_at: Utc::now(),
        })
    }

    /// Verify a candidate password against the stored salted hash
    pub fn verificar_senha(&self, candidata: &str) -> bool {
        verify_secret_hash(candidata, &self.password_hash)
    }
}
