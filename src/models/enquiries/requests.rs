use serde::Deserialize;

// 咨询留言创建请求（公开接口，无需认证）
#[derive(Debug, Deserialize)]
pub struct CreateEnquiryRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}
