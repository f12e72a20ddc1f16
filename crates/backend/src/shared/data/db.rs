use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
#[cfg(test)]
use sea_orm::ConnectOptions;
use std::path::Path;

use super::schema::SCHEMA;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

fn build_sqlite_url(path: &Path) -> String {
    let normalized = path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    format!("sqlite://{}{}?mode=rwc", prefix, normalized)
}

/// Open the SQLite file and make sure every table exists
pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    let db_url = build_sqlite_url(&absolute_path);
    tracing::info!("Opening database {}", db_url);
    let conn = Database::connect(&db_url).await?;
    apply_schema(&conn).await?;
    tracing::info!("Database schema ready ({} tables)", SCHEMA.len());

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

/// Run every `CREATE TABLE IF NOT EXISTS` statement
pub async fn apply_schema<C: ConnectionTrait>(db: &C) -> anyhow::Result<()> {
    for (table, sql) in SCHEMA {
        db.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            sql.to_string(),
        ))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create table {}: {}", table, e))?;
    }
    Ok(())
}

/// Private in-memory database with the full schema.
/// One pooled connection, so every query sees the same memory file.
#[cfg(test)]
pub async fn open_in_memory() -> anyhow::Result<DatabaseConnection> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1).sqlx_logging(false);
    let conn = Database::connect(options).await?;
    apply_schema(&conn).await?;
    Ok(conn)
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_url() {
        assert_eq!(
            build_sqlite_url(Path::new("/var/lib/reservas.db")),
            "sqlite:///var/lib/reservas.db?mode=rwc"
        );
        assert_eq!(
            build_sqlite_url(Path::new("C:\\data\\reservas.db")),
            "sqlite:///C:/data/reservas.db?mode=rwc"
        );
    }
}
