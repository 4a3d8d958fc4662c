//! Objeto repository
//!
//! Runtime-checked sqlx queries over the `objetos` table. Every operation is
//! a single statement; per-record atomicity is delegated to Postgres.

use chrono::NaiveDate;
use sqlx::PgPool;

use achados_common::Result;

use crate::domain::entities::{NovoObjeto, Objeto};

const COLUNAS: &str = "id, titulo, categoria, descricao, local, data_registro, data_expiracao, \
     foto, palavra_passe_hash, contato_instagram, contato_whatsapp, denuncia, status_denuncia";

#[derive(Clone)]
pub struct ObjetoRepository {
    pool: PgPool,
}

impl ObjetoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new record and return it as stored
    pub async fn create(&self, novo: &NovoObjeto) -> Result<Objeto> {
        let sql = format!(
            r#"
            INSERT INTO objetos
                (titulo, categoria, descricao, local, data_registro, data_expiracao,
                 foto, palavra_passe_hash, contato_instagram, contato_whatsapp)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {COLUNAS}
            "#
        );

        let objeto = sqlx::query_as::<_, Objeto>(&sql)
            .bind(&novo.titulo)
            .bind(&novo.categoria)
            .bind(&novo.descricao)
            .bind(&novo.local)
            .bind(novo.data_registro)
            .bind(novo.data_expiracao)
            .bind(&novo.foto)
            .bind(&novo.palavra_passe_hash)
            .bind(&novo.contato_instagram)
            .bind(&novo.contato_whatsapp)
            .fetch_one(&self.pool)
            .await?;

        Ok(objeto)
    }

    /// Find a record by id
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Objeto>> {
        let sql = format!("SELECT {COLUNAS} FROM objetos WHERE id = $1");

        let objeto = sqlx::query_as::<_, Objeto>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(objeto)
    }

    /// List non-expired records, newest registrations first
    pub async fn list_nao_expirados(&self, hoje: NaiveDate) -> Result<Vec<Objeto>> {
        let sql = format!(
            "SELECT {COLUNAS} FROM objetos \
             WHERE data_expiracao >= $1 \
             ORDER BY data_registro DESC, id DESC"
        );

        let objetos = sqlx::query_as::<_, Objeto>(&sql)
            .bind(hoje)
            .fetch_all(&self.pool)
            .await?;

        Ok(objetos)
    }

    /// List non-expired records matching location and category,
    /// case-insensitively
    pub async fn list_por_local_categoria(
        &self,
        local: &str,
        categoria: &str,
        hoje: NaiveDate,
    ) -> Result<Vec<Objeto>> {
        let sql = format!(
            "SELECT {COLUNAS} FROM objetos \
             WHERE LOWER(local) = LOWER($1) \
               AND LOWER(categoria) = LOWER($2) \
               AND data_expiracao >= $3 \
             ORDER BY data_registro DESC, id DESC"
        );

        let objetos = sqlx::query_as::<_, Objeto>(&sql)
            .bind(local)
            .bind(categoria)
            .bind(hoje)
            .fetch_all(&self.pool)
            .await?;

        Ok(objetos)
    }

    /// List every record, including expired ones
    pub async fn list_todos(&self) -> Result<Vec<Objeto>> {
        let sql = format!(
            "SELECT {COLUNAS} FROM objetos ORDER BY data_registro DESC, id DESC"
        );

        let objetos = sqlx::query_as::<_, Objeto>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(objetos)
    }

    /// List reported records
    pub async fn list_denunciados(&self) -> Result<Vec<Objeto>> {
        let sql = format!(
            "SELECT {COLUNAS} FROM objetos WHERE denuncia ORDER BY data_registro DESC, id DESC"
        );

        let objetos = sqlx::query_as::<_, Objeto>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(objetos)
    }

    /// Persist an updated record. `id`, `data_registro` and the secret hash
    /// are immutable; callers mutate a fetched `Objeto` and pass it back.
    pub async fn update(&self, objeto: &Objeto) -> Result<Objeto> {
        let sql = format!(
            r#"
            UPDATE objetos
            SET titulo = $2, categoria = $3, descricao = $4, local = $5,
                foto = $6, contato_instagram = $7, contato_whatsapp = $8
            WHERE id = $1
            RETURNING {COLUNAS}
            "#
        );

        let atualizado = sqlx::query_as::<_, Objeto>(&sql)
            .bind(objeto.id)
            .bind(&objeto.titulo)
            .bind(&objeto.categoria)
            .bind(&objeto.descricao)
            .bind(&objeto.local)
            .bind(&objeto.foto)
            .bind(&objeto.contato_instagram)
            .bind(&objeto.contato_whatsapp)
            .fetch_one(&self.pool)
            .await?;

        Ok(atualizado)
    }

    /// Delete a record by id. Returns whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM objetos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Flag a record as reported. Returns whether the id exists.
    pub async fn marcar_denuncia(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("UPDATE objetos SET denuncia = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Clear both report flags. Idempotent; returns whether the id exists.
    pub async fn limpar_denuncia(&self, id: i32) -> Result<bool> {
        let result =
            sqlx::query("UPDATE objetos SET denuncia = FALSE, status_denuncia = FALSE WHERE id = $1")
                .bind(id)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }
}
