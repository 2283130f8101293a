use bcrypt::{hash, verify};
use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

pub fn hash_password(password: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
    hash(password.as_bytes(), cost)
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    verify(password.as_bytes(), hash)
}

/// 生成会话令牌（UUID v4）
pub fn generate_session_token() -> String {
    Uuid::new_v4().to_string()
}

pub fn generate_account_id() -> String {
    Uuid::new_v4().to_string()
}

/// 当前时间的 ISO-8601 表示
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashed_password_verifies() {
        let hashed = hash_password("securepass123", 4).unwrap();

        assert_ne!(hashed, "securepass123");
        assert!(verify_password("securepass123", &hashed).unwrap());
        assert!(!verify_password("wrong", &hashed).unwrap());
    }

    #[test]
    fn same_password_gets_fresh_salt() {
        let first = hash_password("pw", 4).unwrap();
        let second = hash_password("pw", 4).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn session_tokens_are_unique() {
        let a = generate_session_token();
        let b = generate_session_token();
        assert_eq!(a.len(), 36);
        assert_ne!(a, b);
    }

    #[test]
    fn timestamp_parses_back() {
        let stamp = now_iso8601();
        assert!(chrono::DateTime::parse_from_rfc3339(&stamp).is_ok());
    }
}
