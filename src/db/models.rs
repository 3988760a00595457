use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::HashMap;

/// A stored account. `password` is the salted digest, not the plaintext.
#[derive(Debug, Clone, Serialize, PartialEq, FromRow)]
pub struct Profile {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(skip_serializing)]
    pub salt: String,
}

/// Signup input; `password` is plaintext and is hashed before it reaches the database.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProfile {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl NewProfile {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// All extra attributes of one profile, merged into a single object.
/// Serializes flat: `{"id": 1, "favorite band": "X"}`.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct ProfileExtra {
    pub id: i64,
    #[serde(flatten)]
    pub fields: HashMap<String, String>,
}

impl ProfileExtra {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn profile_extra_serializes_flat_with_id() {
        let extra = ProfileExtra {
            id: 7,
            fields: HashMap::from([("favorite band".to_string(), "X".to_string())]),
        };
        assert_eq!(
            serde_json::to_value(&extra).unwrap(),
            json!({"id": 7, "favorite band": "X"})
        );
    }

    #[test]
    fn profile_serialization_hides_credentials() {
        let profile = Profile {
            id: 1,
            username: "alice".into(),
            email: "alice@example.com".into(),
            password: "digest".into(),
            salt: "abcdefgh".into(),
        };
        let value = serde_json::to_value(&profile).unwrap();
        assert!(value.get("password").is_none());
        assert!(value.get("salt").is_none());
        assert_eq!(value["username"], "alice");
    }
}
