/// Startup seeding
///
/// Ensures the principal account exists so a fresh deployment has a login
/// to start from. Runs once at boot, before the server accepts traffic;
/// a no-op if the account is already present.

use crate::config::SeedConfig;
use rollcall_shared::{
    auth::password,
    models::user::{CreateUser, User},
};
use sqlx::PgPool;
use tracing::{debug, info};

/// Creates the principal account if no user with the configured email exists
pub async fn seed_principal(pool: &PgPool, config: &SeedConfig) -> anyhow::Result<()> {
    if User::find_by_email(pool, &config.principal_email)
        .await?
        .is_some()
    {
        debug!("Principal account already exists, skipping seed");
        return Ok(());
    }

    let password_hash = password::hash_password(&config.principal_password)?;

    let principal = User::create(
        pool,
        CreateUser {
            full_name: "Principal User".to_string(),
            email: config.principal_email.clone(),
            password_hash,
            role: "ROLE_PRINCIPAL".to_string(),
        },
    )
    .await?;

    info!(user_id = principal.id, "Principal user created");
    Ok(())
}
