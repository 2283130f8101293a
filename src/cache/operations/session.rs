use crate::cache::CacheStore;
use crate::cache::keys::user_keys;
use crate::cache::models::CachedSessionIndex;
use crate::error::AccountError;

/// 会话缓存操作
pub struct SessionCacheOperations;

impl SessionCacheOperations {
    /// 缓存会话，并把令牌记入用户的会话索引
    pub async fn cache_session(
        cache: &dyn CacheStore,
        token: &str,
        user_id: &str,
        ttl: u64,
    ) -> Result<(), AccountError> {
        cache.set(&user_keys::session_key(token), user_id, ttl).await?;

        let mut index = Self::get_user_sessions(cache, user_id).await?;
        index.user_id = user_id.to_string();
        index.tokens.push(token.to_string());

        let json = serde_json::to_string(&index)?;
        cache
            .set(&user_keys::user_sessions_key(user_id), &json, ttl)
            .await?;

        Ok(())
    }

    /// 获取会话对应的用户ID
    pub async fn get_session(
        cache: &dyn CacheStore,
        token: &str,
    ) -> Result<Option<String>, AccountError> {
        Ok(cache.get(&user_keys::session_key(token)).await?)
    }

    /// 获取用户的会话索引
    pub async fn get_user_sessions(
        cache: &dyn CacheStore,
        user_id: &str,
    ) -> Result<CachedSessionIndex, AccountError> {
        match cache.get(&user_keys::user_sessions_key(user_id)).await? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(CachedSessionIndex {
                user_id: user_id.to_string(),
                tokens: Vec::new(),
            }),
        }
    }

    /// 删除用户的全部会话和会话索引，返回删除的令牌数
    pub async fn remove_user_sessions(
        cache: &dyn CacheStore,
        user_id: &str,
    ) -> Result<usize, AccountError> {
        let index = Self::get_user_sessions(cache, user_id).await?;

        for token in &index.tokens {
            cache.delete(&user_keys::session_key(token)).await?;
        }
        cache.delete(&user_keys::user_sessions_key(user_id)).await?;

        Ok(index.tokens.len())
    }
}
