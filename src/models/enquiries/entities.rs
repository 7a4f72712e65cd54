use serde::{Deserialize, Serialize};

// 咨询留言实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enquiry {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub is_resolved: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
