use std::sync::Arc;

use crate::cache::{CacheStore, SessionCacheOperations, UserCacheOperations};
use crate::config::AccountConfig;
use crate::database::UserStore;
use crate::error::AccountError;
use crate::models::Account;
use crate::user::AuthResult;
use crate::utils::{generate_session_token, hash_password};

/// 用户账户管理
///
/// 内存列表保存本实例创建的账户，持久化交给 [`UserStore`]，
/// 按邮箱的读穿缓存交给 [`CacheStore`]。邮箱唯一性只针对内存列表检查。
pub struct AccountManager {
    store: Arc<dyn UserStore>,
    cache: Arc<dyn CacheStore>,
    config: AccountConfig,
    users: Vec<Account>,
}

impl AccountManager {
    pub fn new(store: Arc<dyn UserStore>, cache: Arc<dyn CacheStore>, config: AccountConfig) -> Self {
        Self {
            store,
            cache,
            config,
            users: Vec::new(),
        }
    }

    /// 本实例内存中的账户列表
    pub fn users(&self) -> &[Account] {
        &self.users
    }

    /// 注册新用户
    ///
    /// 先写缓存再写数据库；数据库写入失败时内存列表和缓存中已经有该用户。
    pub async fn add_user(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Account, AccountError> {
        if self.email_exists(email) {
            return Err(AccountError::DuplicateEmail {
                email: email.to_string(),
            });
        }
        self.check_password_policy(password)?;

        let password_hash = hash_password(password, self.config.bcrypt_cost)?;
        let account = Account::new(name, email, password_hash);
        self.users.push(account.clone());

        UserCacheOperations::cache_user(
            self.cache.as_ref(),
            &account,
            self.config.session_timeout_secs,
        )
        .await?;

        self.store.insert_user(&account).await?;

        tracing::info!("Created user: {} ({})", account.email, account.id);
        Ok(account)
    }

    /// 邮箱密码认证，成功时签发会话令牌
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthResult, AccountError> {
        let Some(account) = self.get_user_by_email(email).await? else {
            tracing::warn!("Authentication failed: unknown email {}", email);
            return Ok(AuthResult::denied());
        };

        if !account.verify_login(password)? {
            tracing::warn!("Authentication failed: invalid password for {}", email);
            return Ok(AuthResult::denied());
        }

        let token = self.create_session(&account).await?;
        Ok(AuthResult::granted(token))
    }

    /// 按ID删除用户并让其所有会话失效
    ///
    /// 不检查用户是否存在，总是返回 `true`。
    pub async fn remove_user(&mut self, user_id: &str) -> Result<bool, AccountError> {
        let mut emails: Vec<String> = self
            .users
            .iter()
            .filter(|u| u.id == user_id)
            .map(|u| u.email.clone())
            .collect();
        self.users.retain(|u| u.id != user_id);

        // 本实例没见过的用户，从数据库取邮箱以清理缓存
        if emails.is_empty() {
            if let Some(account) = self.store.query_user_by_id(user_id).await? {
                emails.push(account.email);
            }
        }

        for email in &emails {
            UserCacheOperations::remove_user_from_cache(self.cache.as_ref(), email).await?;
        }
        let revoked =
            SessionCacheOperations::remove_user_sessions(self.cache.as_ref(), user_id).await?;

        self.store.delete_user(user_id).await?;

        tracing::info!("Removed user {}, revoked {} session(s)", user_id, revoked);
        Ok(true)
    }

    /// 按邮箱查询用户，先查缓存，未命中再查数据库并回填缓存
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<Account>, AccountError> {
        if let Some(account) = UserCacheOperations::get_cached_user(self.cache.as_ref(), email).await? {
            tracing::debug!("Cache hit for user {}", email);
            return Ok(Some(account));
        }

        tracing::debug!("Cache miss for user {}", email);
        let account = self.store.query_user_by_email(email).await?;
        if let Some(account) = &account {
            UserCacheOperations::cache_user(
                self.cache.as_ref(),
                account,
                self.config.session_timeout_secs,
            )
            .await?;
        }

        Ok(account)
    }

    /// 会话令牌对应的用户ID，过期或已撤销时为 None
    pub async fn resolve_session(&self, token: &str) -> Result<Option<String>, AccountError> {
        SessionCacheOperations::get_session(self.cache.as_ref(), token).await
    }

    async fn create_session(&self, account: &Account) -> Result<String, AccountError> {
        let token = generate_session_token();
        SessionCacheOperations::cache_session(
            self.cache.as_ref(),
            &token,
            &account.id,
            self.config.session_timeout_secs,
        )
        .await?;

        tracing::debug!("Created session for user {}", account.id);
        Ok(token)
    }

    fn email_exists(&self, email: &str) -> bool {
        self.users.iter().any(|u| u.email == email)
    }

    fn check_password_policy(&self, password: &str) -> Result<(), AccountError> {
        match self.config.min_password_length {
            Some(min) if password.chars().count() < min => Err(AccountError::Validation {
                message: format!("password must be at least {} characters", min),
            }),
            _ => Ok(()),
        }
    }
}
