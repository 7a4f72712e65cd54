use serde::Deserialize;

// 感言创建请求
#[derive(Debug, Deserialize)]
pub struct CreateTestimonialRequest {
    pub student_name: String,
    pub course: String,
    pub college: String,
    pub message: String,
    pub rating: f64,
    pub photo_url: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
}

// 感言列表查询参数
#[derive(Debug, Clone, Deserialize)]
pub struct TestimonialListQuery {
    #[serde(default)]
    pub featured_only: bool,
    pub limit: Option<u64>,
}
