use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::database::UserStore;
use crate::error::StoreError;
use crate::models::Account;

/// 进程内用户存储，和 Postgres 表一样对邮箱做唯一约束
#[derive(Default)]
pub struct MemoryUserStore {
    accounts: Mutex<HashMap<String, Account>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Account>> {
        self.accounts.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert_user(&self, account: &Account) -> Result<(), StoreError> {
        let mut accounts = self.lock();
        if accounts
            .values()
            .any(|existing| existing.email == account.email && existing.id != account.id)
        {
            return Err(StoreError::DuplicateEmail {
                email: account.email.clone(),
            });
        }
        accounts.insert(account.id.clone(), account.clone());
        Ok(())
    }

    async fn delete_user(&self, user_id: &str) -> Result<(), StoreError> {
        self.lock().remove(user_id);
        Ok(())
    }

    async fn query_user_by_email(&self, email: &str) -> Result<Option<Account>, StoreError> {
        Ok(self
            .lock()
            .values()
            .find(|account| account.email == email)
            .cloned())
    }

    async fn query_user_by_id(&self, user_id: &str) -> Result<Option<Account>, StoreError> {
        Ok(self.lock().get(user_id).cloned())
    }
}
