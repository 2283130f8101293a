/// 用户信息缓存键前缀（按邮箱）
const USER_PREFIX: &str = "user:";

/// 会话缓存键前缀
const SESSION_PREFIX: &str = "session:";

/// 用户会话索引缓存键前缀
const USER_SESSIONS_PREFIX: &str = "user_sessions:";

/// 生成用户信息缓存键
pub fn user_email_key(email: &str) -> String {
    format!("{}{}", USER_PREFIX, email)
}

/// 生成会话缓存键
pub fn session_key(token: &str) -> String {
    format!("{}{}", SESSION_PREFIX, token)
}

/// 生成用户会话索引缓存键
pub fn user_sessions_key(user_id: &str) -> String {
    format!("{}{}", USER_SESSIONS_PREFIX, user_id)
}
