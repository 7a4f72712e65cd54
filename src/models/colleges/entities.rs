use crate::models::courses::entities::CourseType;
use serde::{Deserialize, Serialize};

// 学院实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct College {
    pub id: String,
    pub name: String,
    pub location: String,
    pub state: String,
    /// 开设的课程类别标签
    pub courses: Vec<CourseType>,
    pub fees_range: String,
    pub rating: f64,
    pub description: String,
    pub established_year: i32,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
