//! SQL DDL for the profile tables.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema with:
/// - `profile.id` INTEGER PRIMARY KEY AUTOINCREMENT
/// - `profile.username` UNIQUE so concurrent signups cannot both insert
/// - `profile.password` holds base64(sha256(password + salt)), never plaintext
/// - `profile_extra` keyed on (profile_id, name), one value per attribute
pub const SQLITE_INSTALL: &str = r#"
CREATE TABLE IF NOT EXISTS profile (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username VARCHAR(255) NOT NULL UNIQUE,
    email VARCHAR(255) NOT NULL,
    password VARCHAR(255) NOT NULL,
    salt VARCHAR(255) NOT NULL
);

CREATE TABLE IF NOT EXISTS profile_extra (
    profile_id INTEGER NOT NULL,
    name VARCHAR(255) NOT NULL,
    value TEXT,
    PRIMARY KEY(profile_id, name)
);
"#;

pub const SQLITE_UNINSTALL: &str = r#"
DROP TABLE IF EXISTS profile;
DROP TABLE IF EXISTS profile_extra;
"#;

/// Split a DDL bundle into individual statements; `sqlx::query` runs one at a time.
pub fn statements(ddl: &str) -> impl Iterator<Item = &str> {
    ddl.split(';').map(str::trim).filter(|s| !s.is_empty())
}
