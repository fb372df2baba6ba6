use rand::Rng;
use sha2::{Digest, Sha256};

/// SHA-256 hex digest of the password. Deterministic and unsalted, so
/// equal inputs always produce equal digests.
pub fn calculate_hash(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// 16 bytes from a cryptographically secure RNG, hex-encoded.
pub fn secure_random_token() -> String {
    let mut bytes = [0u8; 16];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_deterministic() {
        assert_eq!(calculate_hash("password"), calculate_hash("password"));
    }

    #[test]
    fn test_hash_known_vector() {
        assert_eq!(
            calculate_hash("password"),
            "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
        );
    }

    #[test]
    fn test_tokens_differ() {
        assert_ne!(secure_random_token(), secure_random_token());
    }

    #[test]
    fn test_token_format() {
        let token = secure_random_token();
        assert_eq!(token.len(), 32);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
