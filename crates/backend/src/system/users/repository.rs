use anyhow::{Context, Result};
use sea_orm::{ConnectionTrait, DatabaseBackend, QueryResult, Statement};

use crate::shared::data::db::get_connection;

/// Operator account as stored in sys_users
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub is_active: bool,
    pub is_admin: bool,
}

const USER_COLUMNS: &str = "id, username, full_name, is_active, is_admin";

fn from_row(row: &QueryResult) -> Result<UserRecord> {
    Ok(UserRecord {
        id: row.try_get("", "id")?,
        username: row.try_get("", "username")?,
        full_name: row.try_get("", "full_name")?,
        is_active: row.try_get::<i32>("", "is_active")? != 0,
        is_admin: row.try_get::<i32>("", "is_admin")? != 0,
    })
}

pub async fn create_with_password(user: &UserRecord, password_hash: &str) -> Result<()> {
    get_connection()
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "INSERT INTO sys_users (id, username, password_hash, full_name, is_active, is_admin, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            [
                user.id.clone().into(),
                user.username.clone().into(),
                password_hash.to_string().into(),
                user.full_name.clone().into(),
                (if user.is_active { 1 } else { 0 }).into(),
                (if user.is_admin { 1 } else { 0 }).into(),
                chrono::Utc::now().to_rfc3339().into(),
            ],
        ))
        .await
        .context("Failed to insert user")?;
    Ok(())
}

pub async fn get_by_id(id: &str) -> Result<Option<UserRecord>> {
    let row = get_connection()
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            &format!("SELECT {} FROM sys_users WHERE id = ?", USER_COLUMNS),
            [id.into()],
        ))
        .await?;
    row.as_ref().map(from_row).transpose()
}

pub async fn get_by_username(username: &str) -> Result<Option<UserRecord>> {
    let row = get_connection()
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            &format!("SELECT {} FROM sys_users WHERE username = ?", USER_COLUMNS),
            [username.into()],
        ))
        .await?;
    row.as_ref().map(from_row).transpose()
}

pub async fn get_password_hash(user_id: &str) -> Result<Option<String>> {
    let row = get_connection()
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT password_hash FROM sys_users WHERE id = ?",
            [user_id.into()],
        ))
        .await?;
    match row {
        Some(row) => Ok(Some(row.try_get("", "password_hash")?)),
        None => Ok(None),
    }
}

pub async fn update_last_login(id: &str) -> Result<()> {
    get_connection()
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "UPDATE sys_users SET last_login_at = ? WHERE id = ?",
            [chrono::Utc::now().to_rfc3339().into(), id.to_string().into()],
        ))
        .await
        .context("Failed to update last login")?;
    Ok(())
}

pub async fn count_users() -> Result<usize> {
    let row = get_connection()
        .query_one(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT COUNT(*) as count FROM sys_users".to_string(),
        ))
        .await?;
    match row {
        Some(row) => {
            let count: i64 = row.try_get("", "count")?;
            Ok(count as usize)
        }
        None => Ok(0),
    }
}

pub async fn store_refresh_token(user_id: &str, token_hash: &str, expires_at: &str) -> Result<()> {
    get_connection()
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "INSERT INTO sys_refresh_tokens (id, user_id, token_hash, expires_at, created_at)
             VALUES (?, ?, ?, ?, ?)",
            [
                uuid::Uuid::new_v4().to_string().into(),
                user_id.to_string().into(),
                token_hash.to_string().into(),
                expires_at.to_string().into(),
                chrono::Utc::now().to_rfc3339().into(),
            ],
        ))
        .await
        .context("Failed to store refresh token")?;
    Ok(())
}

/// Owner of a live (not expired, not revoked) refresh token
pub async fn find_refresh_token_owner(token_hash: &str) -> Result<Option<String>> {
    let row = get_connection()
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT user_id FROM sys_refresh_tokens
             WHERE token_hash = ? AND expires_at > ? AND revoked_at IS NULL",
            [
                token_hash.to_string().into(),
                chrono::Utc::now().to_rfc3339().into(),
            ],
        ))
        .await?;
    match row {
        Some(row) => Ok(Some(row.try_get("", "user_id")?)),
        None => Ok(None),
    }
}

pub async fn revoke_refresh_token(token_hash: &str) -> Result<()> {
    get_connection()
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "UPDATE sys_refresh_tokens SET revoked_at = ? WHERE token_hash = ?",
            [
                chrono::Utc::now().to_rfc3339().into(),
                token_hash.to_string().into(),
            ],
        ))
        .await?;
    Ok(())
}
