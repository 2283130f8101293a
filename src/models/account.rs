use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::utils::{generate_account_id, verify_password};

/// 用户账户
///
/// 缓存中保存的是完整的 JSON 表示（包括密码哈希），认证时需要用到。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl Account {
    pub fn new(name: &str, email: &str, password_hash: String) -> Self {
        Self {
            id: generate_account_id(),
            name: name.to_string(),
            email: email.to_string(),
            password_hash,
            created_at: Utc::now(),
        }
    }

    pub fn verify_login(&self, password: &str) -> Result<bool, bcrypt::BcryptError> {
        verify_password(password, &self.password_hash)
    }
}
