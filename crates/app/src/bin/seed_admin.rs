// Achados e Perdidos API - Admin credential seeding
//
// Creates (or rotates the password of) an admin account from environment
// variables. Admin credentials live in the database, never in code.
//
// Usage: ADMIN_USERNAME=... ADMIN_PASSWORD=... cargo run --bin seed_admin

use sqlx::PgPool;
use tracing::info;

use achados_common::Config;
use achados_objetos::{Admin, ObjetosRepositories};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;

    let username = std::env::var("ADMIN_USERNAME")
        .map_err(|_| anyhow::anyhow!("ADMIN_USERNAME is required"))?;
    let password = std::env::var("ADMIN_PASSWORD")
        .map_err(|_| anyhow::anyhow!("ADMIN_PASSWORD is required"))?;

    let pool = PgPool::connect(&config.database_url).await?;
    sqlx::migrate!("../../migrations").run(&pool).await?;

    let admin = Admin::novo(&username, &password)?;

    let repos = ObjetosRepositories::new(pool);
    repos.admins.upsert(&admin).await?;

    info!(username = %admin.username, "Admin credential stored");
    Ok(())
}
