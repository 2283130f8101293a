use crate::error::StoreError;
use crate::models::Account;

/// 用户持久化接口
#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    async fn insert_user(&self, account: &Account) -> Result<(), StoreError>;

    /// 删除用户，不存在时不报错
    async fn delete_user(&self, user_id: &str) -> Result<(), StoreError>;

    async fn query_user_by_email(&self, email: &str) -> Result<Option<Account>, StoreError>;

    async fn query_user_by_id(&self, user_id: &str) -> Result<Option<Account>, StoreError>;
}
