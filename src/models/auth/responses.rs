use crate::models::users::entities::UserSummary;
use serde::Serialize;

// 认证响应（注册/登录共用）
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserSummary,
}

#[derive(Debug, Serialize)]
pub struct UserInfoResponse {
    pub user: UserSummary,
}
