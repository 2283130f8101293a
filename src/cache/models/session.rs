use serde::{Deserialize, Serialize};

/// 用户会话索引，记录某个用户签发过的全部会话令牌
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct CachedSessionIndex {
    pub user_id: String,
    pub tokens: Vec<String>,
}
