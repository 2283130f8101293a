use std::sync::Arc;

use account_pipeline::{
    AccountManager, AppError, CacheStore, Config, MemoryCache, MemoryUserStore, RecordPipeline,
    RedisCache, UserRepository, UserStore, pipeline::Record,
};
use serde_json::json;
use sqlx::Executor;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting application...");

    if let Err(e) = run().await {
        tracing::error!("Application error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Application completed successfully");
}

async fn run() -> Result<(), AppError> {
    // 加载配置
    let config = Config::from_env()?;

    let (store, cache) = connect_backends(&config).await?;

    let mut manager = AccountManager::new(store, cache, config.accounts.clone());
    let mut pipeline = RecordPipeline::new(config.pipeline.clone());

    // 示例流程：注册用户
    let john = manager
        .add_user("John Doe", "john@example.com", "securepass123")
        .await?;
    let jane = manager
        .add_user("Jane Smith", "jane@example.com", "strongpass456")
        .await?;
    tracing::info!("Created users: {}, {}", john.email, jane.email);

    // 认证
    let auth = manager
        .authenticate("john@example.com", "securepass123")
        .await?;
    if let Some(token) = auth.token.as_deref() {
        tracing::info!("Authentication successful. Token: {}", token);
    }

    // 处理数据
    let sample_data: Vec<Record> = [
        json!({"id": 1, "name": "Product A", "email": "product_a@company.com"}),
        json!({"id": 2, "name": "Product B", "email": "product_b@company.com"}),
        json!({"id": 3, "name": "Product C", "email": "product_c@company.com"}),
    ]
    .into_iter()
    .filter_map(|value| value.as_object().cloned())
    .collect();

    let result = pipeline.process(sample_data)?;
    tracing::info!("Processed {} records", result.len());

    Ok(())
}

async fn connect_backends(
    config: &Config,
) -> Result<(Arc<dyn UserStore>, Arc<dyn CacheStore>), AppError> {
    if config.use_in_memory {
        tracing::info!("Using in-memory store and cache");
        let store: Arc<dyn UserStore> = Arc::new(MemoryUserStore::new());
        let cache: Arc<dyn CacheStore> = Arc::new(MemoryCache::new());
        return Ok((store, cache));
    }

    // 设置数据库连接池
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .after_connect(|conn, _meta| {
            Box::pin(async move {
                conn.execute("SET application_name = 'account_pipeline';")
                    .await?;
                Ok(())
            })
        })
        .connect(&config.database.url())
        .await
        .map_err(|e| AppError::Connection {
            target: "postgres",
            message: e.to_string(),
        })?;

    let repository = UserRepository::new(pool);
    repository
        .ensure_schema()
        .await
        .map_err(|e| AppError::Connection {
            target: "postgres",
            message: e.to_string(),
        })?;

    // 设置 Redis 客户端
    let cache = RedisCache::open(&config.cache.url()).map_err(|e| AppError::Connection {
        target: "redis",
        message: e.to_string(),
    })?;

    tracing::info!(
        "Connected to postgres at {}:{} and redis at {}:{}",
        config.database.host,
        config.database.port,
        config.cache.host,
        config.cache.port
    );

    let store: Arc<dyn UserStore> = Arc::new(repository);
    let cache: Arc<dyn CacheStore> = Arc::new(cache);
    Ok((store, cache))
}
