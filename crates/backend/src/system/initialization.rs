use anyhow::Result;

use crate::shared::config::AuthConfig;
use crate::system::users::{repository, service};

/// Create the configured admin account when no user exists yet
pub async fn ensure_admin_user_exists(auth: &AuthConfig) -> Result<()> {
    let count = repository::count_users().await?;
    if count > 0 {
        return Ok(());
    }

    tracing::info!("No users found. Creating admin user...");
    let admin_id = service::create(
        &auth.admin_username,
        &auth.admin_password,
        Some("Administrador".to_string()),
        true,
    )
    .await?;

    tracing::warn!(
        "Admin user '{}' created (id {}). Change the password in config.toml",
        auth.admin_username,
        admin_id
    );
    Ok(())
}
