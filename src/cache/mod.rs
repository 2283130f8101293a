// 缓存模块
// 包含缓存接口、后端实现和缓存操作

pub mod keys;
pub mod memory;
pub mod models;
pub mod operations;
pub mod redis_cache;
mod store;

// 重新导出常用类型，方便其他模块使用
pub use memory::MemoryCache;
pub use operations::{SessionCacheOperations, UserCacheOperations};
pub use redis_cache::RedisCache;
pub use store::CacheStore;
