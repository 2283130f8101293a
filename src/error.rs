use thiserror::Error;

/// 账户管理错误
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Email {email} already registered")]
    DuplicateEmail { email: String },

    /// 密码策略校验失败，只有配置了策略时才会出现
    #[error("Validation failed: {message}")]
    Validation { message: String },

    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// 缓存后端错误
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("redis: {0}")]
    Redis(#[from] redis::RedisError),
}

/// 持久化后端错误
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("email {email} violates the unique constraint")]
    DuplicateEmail { email: String },
}

/// 数据处理错误
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    #[error("field '{field}' must be {expected}")]
    InvalidField {
        field: String,
        expected: &'static str,
    },

    #[error("failed to fetch metadata for record {record_id}: {message}")]
    Metadata { record_id: String, message: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}")]
    Invalid { key: String, value: String },
}

/// 演示程序的顶层错误
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Account(#[from] AccountError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("failed to connect to {target}: {message}")]
    Connection {
        target: &'static str,
        message: String,
    },
}
