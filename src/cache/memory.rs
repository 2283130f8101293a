use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use async_trait::async_trait;

use crate::cache::CacheStore;
use crate::error::CacheError;

struct Entry {
    value: String,
    /// 过期时间超出 `Instant` 范围时为 None，表示永不过期
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.is_none_or(|at| at > now)
    }
}

/// 进程内缓存后端，带过期时间
///
/// 过期的键在读取该键或下一次写入时清除。
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// 未过期的键数量
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.lock()
            .values()
            .filter(|entry| entry.is_live(now))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.lock()
            .get(key)
            .is_some_and(|entry| entry.is_live(Instant::now()))
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Entry>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl CacheStore for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut entries = self.lock();
        match entries.get(key) {
            Some(entry) if entry.is_live(Instant::now()) => Ok(Some(entry.value.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &str, expiry_secs: u64) -> Result<(), CacheError> {
        let now = Instant::now();
        let entry = Entry {
            value: value.to_string(),
            expires_at: now.checked_add(Duration::from_secs(expiry_secs)),
        };

        let mut entries = self.lock();
        entries.retain(|_, entry| entry.is_live(now));
        entries.insert(key.to_string(), entry);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_then_get() {
        let cache = MemoryCache::new();
        cache.set("user:a@x.com", "payload", 60).await.unwrap();

        assert_eq!(cache.get("user:a@x.com").await.unwrap().as_deref(), Some("payload"));
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn missing_key_is_none() {
        let cache = MemoryCache::new();
        assert_eq!(cache.get("nothing").await.unwrap(), None);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn zero_expiry_is_never_visible() {
        let cache = MemoryCache::new();
        cache.set("session:t", "1", 0).await.unwrap();

        assert!(!cache.contains_key("session:t"));
        assert_eq!(cache.get("session:t").await.unwrap(), None);
    }

    #[tokio::test]
    async fn huge_expiry_never_expires() {
        let cache = MemoryCache::new();
        cache.set("user:a@x.com", "payload", u64::MAX).await.unwrap();

        assert_eq!(cache.get("user:a@x.com").await.unwrap().as_deref(), Some("payload"));
        assert!(cache.contains_key("user:a@x.com"));
    }

    #[tokio::test]
    async fn set_drops_expired_entries() {
        let cache = MemoryCache::new();
        cache.set("session:stale", "1", 0).await.unwrap();
        cache.set("session:other", "2", 0).await.unwrap();
        cache.set("session:live", "3", 60).await.unwrap();

        // 过期的键从未被读取，也不再占用空间
        assert_eq!(cache.lock().len(), 1);
        assert!(cache.contains_key("session:live"));
    }

    #[tokio::test]
    async fn delete_removes_key() {
        let cache = MemoryCache::new();
        cache.set("k", "v", 60).await.unwrap();
        cache.delete("k").await.unwrap();
        cache.delete("never-set").await.unwrap();

        assert_eq!(cache.get("k").await.unwrap(), None);
    }
}
