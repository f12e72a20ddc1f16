use anyhow::Result;
use contracts::system::auth::UserInfo;
use sha2::{Digest, Sha256};

use super::repository::{self, UserRecord};
use crate::system::auth::{jwt, password};

impl From<UserRecord> for UserInfo {
    fn from(u: UserRecord) -> Self {
        UserInfo {
            id: u.id,
            username: u.username,
            full_name: u.full_name,
            is_admin: u.is_admin,
        }
    }
}

pub async fn create(
    username: &str,
    plain_password: &str,
    full_name: Option<String>,
    is_admin: bool,
) -> Result<String> {
    let username = username.trim();
    if username.is_empty() {
        return Err(anyhow::anyhow!("Username cannot be empty"));
    }
    if repository::get_by_username(username).await?.is_some() {
        return Err(anyhow::anyhow!("Username already exists"));
    }
    password::validate_password_strength(plain_password)?;
    let password_hash = password::hash_password(plain_password)?;

    let user = UserRecord {
        id: uuid::Uuid::new_v4().to_string(),
        username: username.to_string(),
        full_name,
        is_active: true,
        is_admin,
    };
    repository::create_with_password(&user, &password_hash).await?;
    Ok(user.id)
}

pub async fn get_by_id(id: &str) -> Result<Option<UserRecord>> {
    repository::get_by_id(id).await
}

/// User matching the credentials; None for unknown user, wrong password or inactive account
pub async fn verify_credentials(username: &str, plain_password: &str) -> Result<Option<UserRecord>> {
    let user = match repository::get_by_username(username.trim()).await? {
        Some(u) => u,
        None => return Ok(None),
    };
    if !user.is_active {
        tracing::warn!("Login attempt for inactive user {}", user.username);
        return Ok(None);
    }

    let password_hash = repository::get_password_hash(&user.id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Password hash not found"))?;
    if !password::verify_password(plain_password, &password_hash)? {
        return Ok(None);
    }

    if let Err(e) = repository::update_last_login(&user.id).await {
        tracing::warn!("Could not update last login: {}", e);
    }
    Ok(Some(user))
}

pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// New refresh token for the user; the stored copy is hashed
pub async fn issue_refresh_token(user_id: &str) -> Result<String> {
    let token = jwt::generate_refresh_token();
    repository::store_refresh_token(
        user_id,
        &hash_token(&token),
        &jwt::calculate_refresh_token_expiration(),
    )
    .await?;
    Ok(token)
}

pub async fn refresh_token_owner(token: &str) -> Result<Option<String>> {
    repository::find_refresh_token_owner(&hash_token(token)).await
}

pub async fn revoke_refresh_token(token: &str) -> Result<()> {
    repository::revoke_refresh_token(&hash_token(token)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_token_is_hex_sha256() {
        let h = hash_token("abc");
        assert_eq!(
            h,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
