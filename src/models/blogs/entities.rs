use serde::{Deserialize, Serialize};

// 博客文章实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub tags: Vec<String>,
    pub is_published: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
