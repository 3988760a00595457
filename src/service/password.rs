//! Salted password digests: `base64(sha256(password + salt))`.

use base64::Engine;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Length of the per-account salt, in characters.
pub const SALT_LENGTH: usize = 8;

const SALT_CHARSET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Generate a random alphanumeric salt of `SALT_LENGTH` characters.
pub fn generate_salt() -> String {
    use rand::RngExt;
    let mut rng = rand::rng();
    (0..SALT_LENGTH)
        .map(|_| SALT_CHARSET[rng.random_range(0..SALT_CHARSET.len())] as char)
        .collect()
}

/// Standard-alphabet base64 of sha256 over the password followed by the salt.
pub fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(salt.as_bytes());
    base64::engine::general_purpose::STANDARD.encode(hasher.finalize())
}

/// Recompute the digest and compare it to `stored` in constant time.
pub fn verify_password(password: &str, salt: &str, stored: &str) -> bool {
    let computed = hash_password(password, salt);
    computed.as_bytes().ct_eq(stored.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salt_is_eight_alphanumeric_chars() {
        let salt = generate_salt();
        assert_eq!(salt.len(), SALT_LENGTH);
        assert!(salt.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn salts_differ_between_calls() {
        // 62^8 possibilities; a collision here means the rng is broken
        assert_ne!(generate_salt(), generate_salt());
    }

    #[test]
    fn hash_matches_known_digest() {
        // sha256("") in standard base64
        assert_eq!(
            hash_password("", ""),
            "47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU="
        );
        // the password and salt are concatenated before hashing
        assert_eq!(hash_password("hunter2", "abc"), hash_password("hunter2abc", ""));
    }

    #[test]
    fn verify_accepts_only_the_right_password() {
        let salt = "Xy12Ab34";
        let stored = hash_password("correct horse", salt);
        assert!(verify_password("correct horse", salt, &stored));
        assert!(!verify_password("wrong horse", salt, &stored));
        assert!(!verify_password("correct horse", "otherslt", &stored));
    }
}
