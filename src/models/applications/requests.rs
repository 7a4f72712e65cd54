use serde::Deserialize;

// 入学申请创建请求
#[derive(Debug, Deserialize)]
pub struct CreateApplicationRequest {
    pub college_id: String,
    pub course_id: String,
    #[serde(default)]
    pub documents: Vec<String>,
    pub notes: Option<String>,
}
