use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

use crate::error::ProfileError;

/// Runtime settings. Environment variables prefixed `PROFILE_` override the defaults,
/// e.g. `PROFILE_DATABASE_URL=sqlite:/var/lib/profile.db`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub loglevel: String,
    pub max_connections: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:profile.db".to_string(),
            loglevel: "info".to_string(),
            max_connections: 1,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ProfileError> {
        Self::figment().extract().map_err(Into::into)
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed("PROFILE_"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("PROFILE_DATABASE_URL", "sqlite::memory:");
            jail.set_env("PROFILE_MAX_CONNECTIONS", "4");

            let cfg: Config = Config::figment().extract()?;
            assert_eq!(cfg.database_url, "sqlite::memory:");
            assert_eq!(cfg.max_connections, 4);
            assert_eq!(cfg.loglevel, "info");
            Ok(())
        });
    }
}
