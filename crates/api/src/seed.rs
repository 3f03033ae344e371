//! Idempotent startup seeding.
//!
//! Ensures the built-in ADMIN and USER roles exist and that at least one
//! administrator account is present, so a fresh deployment is usable
//! without manual SQL. Each insert is gated on an existence check, so
//! restarting the server never duplicates data.

use ecobin_core::roles::{ROLE_ADMIN, ROLE_USER};
use ecobin_db::models::role::CreateRole;
use ecobin_db::models::user::NewUser;
use ecobin_db::repositories::{RoleRepo, UserRepo};
use ecobin_db::DbPool;

use crate::auth::password;
use crate::config::ServerConfig;

/// Seed roles and the admin account. Safe to call on every startup.
pub async fn run(pool: &DbPool, config: &ServerConfig) -> anyhow::Result<()> {
    seed_role(pool, ROLE_ADMIN, "Administrator with full access").await?;
    seed_role(pool, ROLE_USER, "Standard user").await?;
    seed_admin_user(pool, config).await?;
    Ok(())
}

async fn seed_role(pool: &DbPool, role_name: &str, description: &str) -> anyhow::Result<()> {
    if RoleRepo::exists(pool, role_name).await? {
        return Ok(());
    }
    RoleRepo::create(
        pool,
        &CreateRole {
            role_name: role_name.to_string(),
            role_description: Some(description.to_string()),
        },
    )
    .await?;
    tracing::info!(role = role_name, "Seeded role");
    Ok(())
}

async fn seed_admin_user(pool: &DbPool, config: &ServerConfig) -> anyhow::Result<()> {
    if UserRepo::find_by_email(pool, &config.admin_email)
        .await?
        .is_some()
    {
        return Ok(());
    }

    let password_hash = password::hash_password(&config.admin_password)
        .map_err(|e| anyhow::anyhow!("Failed to hash admin password: {e}"))?;

    UserRepo::create(
        pool,
        &NewUser {
            first_name: "Admin".to_string(),
            last_name: "User".to_string(),
            contact_number: None,
            email: config.admin_email.clone(),
            password_hash,
            role_name: ROLE_ADMIN.to_string(),
        },
    )
    .await?;
    tracing::info!(email = %config.admin_email, "Seeded admin account");
    Ok(())
}
