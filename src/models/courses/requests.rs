use super::entities::CourseType;
use serde::Deserialize;

// 课程创建请求
#[derive(Debug, Deserialize)]
pub struct CreateCourseRequest {
    pub name: String,
    pub course_type: CourseType,
    pub duration: String,
    pub description: String,
    pub eligibility: String,
    pub career_opportunities: Vec<String>,
}

// 课程列表查询参数
#[derive(Debug, Clone, Deserialize)]
pub struct CourseListQuery {
    pub course_type: Option<CourseType>,
    pub limit: Option<u64>,
}
