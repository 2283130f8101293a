// 数据库模块
// 包含持久化接口和存储库实现

pub mod memory;
pub mod repositories;
mod store;

// 重新导出常用类型，方便其他模块使用
pub use memory::MemoryUserStore;
pub use repositories::user::UserRepository;
pub use store::UserStore;
