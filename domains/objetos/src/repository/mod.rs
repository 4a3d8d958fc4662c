//! Repository implementations for the Objetos domain

pub mod admins;
pub mod objetos;

use sqlx::PgPool;

pub use admins::AdminRepository;
pub use objetos::ObjetoRepository;

use achados_common::Result;

/// Combined repository access for the Objetos domain
#[derive(Clone)]
pub struct ObjetosRepositories {
    pool: PgPool,
    pub objetos: ObjetoRepository,
    pub admins: AdminRepository,
}

impl ObjetosRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            objetos: ObjetoRepository::new(pool.clone()),
            admins: AdminRepository::new(pool.clone()),
            pool,
        }
    }

    /// Ping the store. Used by the info endpoint to report reachability.
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
