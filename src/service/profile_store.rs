use crate::config::Config;
use crate::db::models::{NewProfile, Profile, ProfileExtra};
use crate::db::sqlite::{ProfileStorage, SqlitePool};
use crate::error::ProfileError;
use crate::service::password::{generate_salt, hash_password, verify_password};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::collections::HashMap;
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Result of a login attempt. Only `Authenticated` grants access.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthOutcome {
    Authenticated(Profile),
    UnknownUser,
    WrongPassword,
    /// The lookup failed in storage; the error has already been logged.
    Unavailable,
}

impl AuthOutcome {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthOutcome::Authenticated(_))
    }

    pub fn into_profile(self) -> Option<Profile> {
        match self {
            AuthOutcome::Authenticated(profile) => Some(profile),
            _ => None,
        }
    }
}

/// Account creation, authentication and extra attributes on top of `ProfileStorage`.
#[derive(Clone)]
pub struct ProfileStore {
    storage: ProfileStorage,
}

impl ProfileStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            storage: ProfileStorage::new(pool),
        }
    }

    /// Open a single-connection pool on `database_url`, creating the file if needed.
    pub async fn connect(database_url: &str) -> Result<Self, ProfileError> {
        Self::connect_with(database_url, 1).await
    }

    pub async fn from_config(cfg: &Config) -> Result<Self, ProfileError> {
        Self::connect_with(&cfg.database_url, cfg.max_connections).await
    }

    async fn connect_with(database_url: &str, max_connections: u32) -> Result<Self, ProfileError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(connect_opts)
            .await?;
        Ok(Self::new(pool))
    }

    /// Wait for in-flight queries and close every connection.
    pub async fn close(self) {
        self.storage.pool().close().await;
    }

    pub fn storage(&self) -> &ProfileStorage {
        &self.storage
    }

    pub async fn install(&self) -> Result<(), ProfileError> {
        self.storage.install().await?;
        info!("profile tables installed");
        Ok(())
    }

    pub async fn uninstall(&self) -> Result<(), ProfileError> {
        self.storage.uninstall().await?;
        info!("profile tables dropped");
        Ok(())
    }

    pub async fn get_profile_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Profile>, ProfileError> {
        debug!(username, "looking up profile by username");
        self.storage.get_by_username(username).await
    }

    pub async fn get_profile_by_id(&self, id: i64) -> Result<Option<Profile>, ProfileError> {
        debug!(id, "looking up profile by id");
        self.storage.get_by_id(id).await
    }

    pub async fn get_profile_extra(&self, id: i64) -> Result<ProfileExtra, ProfileError> {
        self.storage.get_extra(id).await
    }

    /// Hash the password with a fresh salt and insert the account.
    ///
    /// The existence check is not atomic with the insert; the UNIQUE constraint on
    /// `username` catches the race and is reported as `DuplicateUser` as well.
    pub async fn create_profile(&self, new: NewProfile) -> Result<Profile, ProfileError> {
        let salt = generate_salt();
        let password_hash = hash_password(&new.password, &salt);

        if self.storage.username_exists(&new.username).await? {
            warn!(username = %new.username, "signup rejected: duplicate user");
            return Err(ProfileError::DuplicateUser(new.username));
        }

        let profile = self
            .storage
            .insert(&new.username, &new.email, &password_hash, &salt)
            .await
            .inspect_err(|e| {
                if let ProfileError::DuplicateUser(username) = e {
                    warn!(%username, "signup lost race: duplicate user");
                }
            })?;

        info!(id = profile.id, username = %profile.username, "profile created");
        Ok(profile)
    }

    /// Re-hash `new_password` with the profile's existing salt and store it.
    pub async fn update_password(
        &self,
        profile: &Profile,
        new_password: &str,
    ) -> Result<(), ProfileError> {
        let password_hash = hash_password(new_password, &profile.salt);
        let updated = self.storage.set_password(profile.id, &password_hash).await?;
        if updated == 0 {
            return Err(ProfileError::ProfileNotFound(profile.id));
        }
        info!(id = profile.id, "password updated");
        Ok(())
    }

    /// Insert-or-replace every attribute; returns once all rows are committed.
    pub async fn update_profile_extra(
        &self,
        id: i64,
        extra: &HashMap<String, String>,
    ) -> Result<(), ProfileError> {
        self.storage.upsert_extra_many(id, extra).await
    }

    /// Check `password` against the stored digest. Never fails: storage errors are
    /// logged and reported as `AuthOutcome::Unavailable`.
    pub async fn authenticate_user(&self, username: &str, password: &str) -> AuthOutcome {
        let profile = match self.storage.get_by_username(username).await {
            Ok(Some(profile)) => profile,
            Ok(None) => {
                debug!(username, "authentication failed: user not found");
                return AuthOutcome::UnknownUser;
            }
            Err(e) => {
                warn!(username, error = %e, "authentication lookup failed");
                return AuthOutcome::Unavailable;
            }
        };

        if verify_password(password, &profile.salt, &profile.password) {
            AuthOutcome::Authenticated(profile)
        } else {
            debug!(username, "authentication failed: wrong password");
            AuthOutcome::WrongPassword
        }
    }
}
