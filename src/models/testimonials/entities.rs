use serde::{Deserialize, Serialize};

// 学生感言实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub student_name: String,
    pub course: String,
    pub college: String,
    pub message: String,
    pub rating: f64,
    pub photo_url: Option<String>,
    pub is_featured: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
