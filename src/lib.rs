pub mod cache;
pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod stats;
pub mod user;
pub mod utils;

pub use cache::{CacheStore, MemoryCache, RedisCache};
pub use config::{AccountConfig, Config, PipelineConfig};
pub use database::{MemoryUserStore, UserRepository, UserStore};
pub use error::{AccountError, AppError, PipelineError};
pub use models::Account;
pub use pipeline::{Record, RecordPipeline};
pub use user::{AccountManager, AuthResult};
