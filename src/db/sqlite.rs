use crate::db::models::{Profile, ProfileExtra};
use crate::db::schema::{SQLITE_INSTALL, SQLITE_UNINSTALL, statements};
use crate::error::ProfileError;
use sqlx::{Pool, Sqlite};
use std::collections::HashMap;
use tracing::debug;

pub type SqlitePool = Pool<Sqlite>;

/// Raw data access for the `profile` and `profile_extra` tables.
#[derive(Clone)]
pub struct ProfileStorage {
    pool: SqlitePool,
}

impl ProfileStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create both tables if absent.
    pub async fn install(&self) -> Result<(), ProfileError> {
        self.execute_bundle(SQLITE_INSTALL).await
    }

    /// Drop both tables if present.
    pub async fn uninstall(&self) -> Result<(), ProfileError> {
        self.execute_bundle(SQLITE_UNINSTALL).await
    }

    async fn execute_bundle(&self, ddl: &str) -> Result<(), ProfileError> {
        // sqlx::query runs a single statement, so feed the bundle one at a time
        for stmt in statements(ddl) {
            sqlx::query(stmt).execute(&self.pool).await?;
        }
        Ok(())
    }

    pub async fn get_by_username(&self, username: &str) -> Result<Option<Profile>, ProfileError> {
        let row = sqlx::query_as::<_, Profile>(
            "SELECT id, username, email, password, salt FROM profile WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Profile>, ProfileError> {
        let row = sqlx::query_as::<_, Profile>(
            "SELECT id, username, email, password, salt FROM profile WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn username_exists(&self, username: &str) -> Result<bool, ProfileError> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT id FROM profile WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }

    /// Insert a profile whose password is already hashed. Returns the stored row.
    /// A UNIQUE violation on `username` surfaces as `DuplicateUser`.
    pub async fn insert(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
        salt: &str,
    ) -> Result<Profile, ProfileError> {
        let result =
            sqlx::query("INSERT INTO profile (username, email, password, salt) VALUES (?, ?, ?, ?)")
                .bind(username)
                .bind(email)
                .bind(password_hash)
                .bind(salt)
                .execute(&self.pool)
                .await
                .map_err(|e| match e {
                    sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                        ProfileError::DuplicateUser(username.to_string())
                    }
                    other => other.into(),
                })?;

        Ok(Profile {
            id: result.last_insert_rowid(),
            username: username.to_string(),
            email: email.to_string(),
            password: password_hash.to_string(),
            salt: salt.to_string(),
        })
    }

    /// Overwrite the stored digest. Returns the number of rows touched.
    pub async fn set_password(&self, id: i64, password_hash: &str) -> Result<u64, ProfileError> {
        let result = sqlx::query("UPDATE profile SET password = ? WHERE id = ?")
            .bind(password_hash)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Collect every extra attribute of a profile. NULL values are skipped.
    pub async fn get_extra(&self, profile_id: i64) -> Result<ProfileExtra, ProfileError> {
        let rows: Vec<(String, Option<String>)> =
            sqlx::query_as("SELECT name, value FROM profile_extra WHERE profile_id = ?")
                .bind(profile_id)
                .fetch_all(&self.pool)
                .await?;

        let fields = rows
            .into_iter()
            .filter_map(|(name, value)| value.map(|v| (name, v)))
            .collect();

        Ok(ProfileExtra {
            id: profile_id,
            fields,
        })
    }

    /// Batch upsert using a single transaction; returns only after commit.
    pub async fn upsert_extra_many(
        &self,
        profile_id: i64,
        items: &HashMap<String, String>,
    ) -> Result<(), ProfileError> {
        if items.is_empty() {
            return Ok(());
        }

        let mut tx = self.pool.begin().await?;
        for (name, value) in items {
            sqlx::query(
                "INSERT OR REPLACE INTO profile_extra (profile_id, name, value) VALUES (?, ?, ?)",
            )
            .bind(profile_id)
            .bind(name)
            .bind(value)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        debug!(profile_id, count = items.len(), "profile extras upserted");
        Ok(())
    }
}
