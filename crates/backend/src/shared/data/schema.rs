//! Tables created at start-up (`CREATE TABLE IF NOT EXISTS`)

pub const SCHEMA: &[(&str, &str)] = &[
    (
        "sys_users",
        r#"
        CREATE TABLE IF NOT EXISTS sys_users (
            id TEXT PRIMARY KEY NOT NULL,
            username TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            full_name TEXT,
            is_active INTEGER NOT NULL DEFAULT 1,
            is_admin INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL,
            last_login_at TEXT
        );
        "#,
    ),
    (
        "sys_refresh_tokens",
        r#"
        CREATE TABLE IF NOT EXISTS sys_refresh_tokens (
            id TEXT PRIMARY KEY NOT NULL,
            user_id TEXT NOT NULL,
            token_hash TEXT NOT NULL,
            expires_at TEXT NOT NULL,
            created_at TEXT NOT NULL,
            revoked_at TEXT
        );
        "#,
    ),
    (
        "sys_settings",
        r#"
        CREATE TABLE IF NOT EXISTS sys_settings (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL,
            description TEXT,
            created_at TEXT,
            updated_at TEXT
        );
        "#,
    ),
    (
        "a001_publisher",
        r#"
        CREATE TABLE IF NOT EXISTS a001_publisher (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            emails TEXT NOT NULL DEFAULT '[]',
            phones TEXT NOT NULL DEFAULT '[]',
            active INTEGER NOT NULL DEFAULT 1
        );
        "#,
    ),
    (
        "a002_book",
        r#"
        CREATE TABLE IF NOT EXISTS a002_book (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            isbn TEXT NOT NULL,
            price REAL NOT NULL DEFAULT 0,
            publisher_id INTEGER NOT NULL,
            active INTEGER NOT NULL DEFAULT 1,
            pending_units INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a003_course",
        r#"
        CREATE TABLE IF NOT EXISTS a003_course (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            level TEXT NOT NULL DEFAULT '',
            active INTEGER NOT NULL DEFAULT 1
        );
        "#,
    ),
    (
        "a003_course_book",
        r#"
        CREATE TABLE IF NOT EXISTS a003_course_book (
            course_id INTEGER NOT NULL,
            book_id INTEGER NOT NULL,
            PRIMARY KEY (course_id, book_id)
        );
        "#,
    ),
    (
        "a004_order",
        r#"
        CREATE TABLE IF NOT EXISTS a004_order (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            publisher_id INTEGER NOT NULL,
            date TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'pendiente'
        );
        "#,
    ),
    (
        "a004_order_line",
        r#"
        CREATE TABLE IF NOT EXISTS a004_order_line (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            order_id INTEGER NOT NULL,
            book_id INTEGER NOT NULL,
            quantity INTEGER NOT NULL,
            received INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a005_reservation",
        r#"
        CREATE TABLE IF NOT EXISTS a005_reservation (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            student_name TEXT NOT NULL,
            student_email TEXT NOT NULL,
            course_id INTEGER NOT NULL,
            date TEXT NOT NULL,
            active INTEGER NOT NULL DEFAULT 1,
            proof TEXT
        );
        "#,
    ),
    (
        "a005_reservation_line",
        r#"
        CREATE TABLE IF NOT EXISTS a005_reservation_line (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            reservation_id INTEGER NOT NULL,
            book_id INTEGER NOT NULL,
            delivered INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a006_reservation_period",
        r#"
        CREATE TABLE IF NOT EXISTS a006_reservation_period (
            id INTEGER PRIMARY KEY NOT NULL,
            start_date TEXT NOT NULL,
            end_date TEXT NOT NULL
        );
        "#,
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_statement_creates_its_table() {
        for (table, sql) in SCHEMA {
            assert!(
                sql.contains(&format!("CREATE TABLE IF NOT EXISTS {} ", table)),
                "{} does not match its statement",
                table
            );
        }
    }
}
