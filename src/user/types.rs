/// 认证结果：成功时带会话令牌
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResult {
    pub success: bool,
    pub token: Option<String>,
}

impl AuthResult {
    pub fn granted(token: String) -> Self {
        Self {
            success: true,
            token: Some(token),
        }
    }

    pub fn denied() -> Self {
        Self {
            success: false,
            token: None,
        }
    }
}
