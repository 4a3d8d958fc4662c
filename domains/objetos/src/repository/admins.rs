//! Admin credential repository

use sqlx::PgPool;

use achados_common::Result;

use crate::domain::entities::Admin;

#[derive(Clone)]
pub struct AdminRepository {
    pool: PgPool,
}

impl AdminRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an admin by username
    pub async fn get_by_username(&self, username: &str) -> Result<Option<Admin>> {
        let admin = sqlx::query_as::<_, Admin>(
            "SELECT id, username, password_hash, created_at FROM admins WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(admin)
    }

    /// Insert an admin credential, rotating the password hash if the
    /// username already exists. Used by the seeding binary.
    pub async fn upsert(&self, admin: &Admin) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO admins (id, username, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (username) DO UPDATE SET password_hash = EXCLUDED.password_hash
            "#,
        )
        .bind(admin.id)
        .bind(&admin.username)
        .bind(&admin.password_hash)
        .bind(admin.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
