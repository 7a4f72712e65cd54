use crate::models::courses::entities::CourseType;
use serde::Deserialize;

// 学院创建请求
#[derive(Debug, Deserialize)]
pub struct CreateCollegeRequest {
    pub name: String,
    pub location: String,
    pub state: String,
    pub courses: Vec<CourseType>,
    pub fees_range: String,
    pub rating: f64,
    pub description: String,
    pub established_year: i32,
}

// 学院列表查询参数
#[derive(Debug, Clone, Deserialize)]
pub struct CollegeListQuery {
    pub state: Option<String>,
    pub course_type: Option<CourseType>,
    pub limit: Option<u64>,
}
