use crate::error::CacheError;

/// 缓存后端接口
///
/// 值一律为字符串，结构化数据由调用方序列化成 JSON。
#[async_trait::async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// 写入键值，`expiry_secs` 秒后过期
    async fn set(&self, key: &str, value: &str, expiry_secs: u64) -> Result<(), CacheError>;

    async fn delete(&self, key: &str) -> Result<(), CacheError>;
}
