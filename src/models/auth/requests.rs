use serde::Deserialize;

// 用户注册请求（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub phone: Option<String>,
    /// 明文密码，入库前哈希
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

// 用户登录请求
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
