use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use contracts::system::auth::TokenClaims;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::Rng;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

use crate::shared::data::db::get_connection;

const ACCESS_TOKEN_LIFETIME_HOURS: i64 = 12;
const REFRESH_TOKEN_LIFETIME_DAYS: i64 = 30;
const JWT_SECRET_KEY: &str = "jwt_secret";

pub fn build_claims(user_id: &str, username: &str, is_admin: bool, now: DateTime<Utc>) -> TokenClaims {
    TokenClaims {
        sub: user_id.to_string(),
        username: username.to_string(),
        is_admin,
        exp: (now + chrono::Duration::hours(ACCESS_TOKEN_LIFETIME_HOURS)).timestamp() as usize,
        iat: now.timestamp() as usize,
    }
}

pub fn encode_claims(claims: &TokenClaims, secret: &str) -> Result<String> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .context("Failed to encode JWT token")
}

pub fn decode_claims(token: &str, secret: &str) -> Result<TokenClaims> {
    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .context("Failed to decode JWT token")?;
    Ok(token_data.claims)
}

/// Access token for a freshly authenticated user
pub async fn generate_access_token(user_id: &str, username: &str, is_admin: bool) -> Result<String> {
    let claims = build_claims(user_id, username, is_admin, Utc::now());
    let secret = get_jwt_secret().await?;
    encode_claims(&claims, &secret)
}

pub async fn validate_token(token: &str) -> Result<TokenClaims> {
    let secret = get_jwt_secret().await?;
    decode_claims(token, &secret)
}

/// Opaque refresh token; only its hash is stored
pub fn generate_refresh_token() -> String {
    uuid::Uuid::new_v4().to_string()
}

pub fn calculate_refresh_token_expiration() -> String {
    (Utc::now() + chrono::Duration::days(REFRESH_TOKEN_LIFETIME_DAYS)).to_rfc3339()
}

/// Secret from sys_settings, generated and stored on first use
pub async fn get_jwt_secret() -> Result<String> {
    match get_jwt_secret_from_db().await {
        Ok(Some(secret)) => Ok(secret),
        Ok(None) | Err(_) => {
            let secret = generate_jwt_secret();
            if let Err(e) = save_jwt_secret_to_db(&secret).await {
                tracing::warn!("Could not persist JWT secret: {}", e);
            }
            Ok(secret)
        }
    }
}

/// 256 random bits, base64
fn generate_jwt_secret() -> String {
    use base64::{engine::general_purpose, Engine as _};
    let random_bytes: [u8; 32] = rand::thread_rng().gen();
    general_purpose::STANDARD.encode(random_bytes)
}

async fn get_jwt_secret_from_db() -> Result<Option<String>> {
    let row = get_connection()
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT value FROM sys_settings WHERE key = ?",
            [JWT_SECRET_KEY.into()],
        ))
        .await?;

    match row {
        Some(row) => Ok(Some(row.try_get("", "value")?)),
        None => Ok(None),
    }
}

async fn save_jwt_secret_to_db(secret: &str) -> Result<()> {
    let now = Utc::now().to_rfc3339();
    get_connection()
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "INSERT OR REPLACE INTO sys_settings (key, value, description, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)",
            [
                JWT_SECRET_KEY.into(),
                secret.to_string().into(),
                "Auto-generated JWT secret for authentication".into(),
                now.clone().into(),
                now.into(),
            ],
        ))
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_with_same_secret() {
        let claims = build_claims("u-1", "admin", true, Utc::now());
        let token = encode_claims(&claims, "secret-a").unwrap();
        let decoded = decode_claims(&token, "secret-a").unwrap();
        assert_eq!(decoded.sub, "u-1");
        assert_eq!(decoded.username, "admin");
        assert!(decoded.is_admin);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let claims = build_claims("u-1", "admin", false, Utc::now());
        let token = encode_claims(&claims, "secret-a").unwrap();
        assert!(decode_claims(&token, "secret-b").is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let issued = Utc::now() - chrono::Duration::hours(ACCESS_TOKEN_LIFETIME_HOURS + 1);
        let claims = build_claims("u-1", "admin", false, issued);
        let token = encode_claims(&claims, "secret-a").unwrap();
        assert!(decode_claims(&token, "secret-a").is_err());
    }

    #[test]
    fn test_generated_secret_length() {
        use base64::{engine::general_purpose, Engine as _};
        let secret = generate_jwt_secret();
        assert_eq!(general_purpose::STANDARD.decode(secret).unwrap().len(), 32);
    }
}
