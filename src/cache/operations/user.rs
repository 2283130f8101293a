use crate::cache::CacheStore;
use crate::cache::keys::user_keys;
use crate::error::AccountError;
use crate::models::Account;

/// 用户缓存操作
pub struct UserCacheOperations;

impl UserCacheOperations {
    /// 将用户信息按邮箱缓存
    pub async fn cache_user(
        cache: &dyn CacheStore,
        account: &Account,
        ttl: u64,
    ) -> Result<(), AccountError> {
        let key = user_keys::user_email_key(&account.email);
        let json = serde_json::to_string(account)?;

        cache.set(&key, &json, ttl).await?;

        Ok(())
    }

    /// 按邮箱从缓存获取用户信息
    pub async fn get_cached_user(
        cache: &dyn CacheStore,
        email: &str,
    ) -> Result<Option<Account>, AccountError> {
        let key = user_keys::user_email_key(email);

        match cache.get(&key).await? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// 从缓存中删除用户
    pub async fn remove_user_from_cache(
        cache: &dyn CacheStore,
        email: &str,
    ) -> Result<(), AccountError> {
        cache.delete(&user_keys::user_email_key(email)).await?;
        Ok(())
    }
}
