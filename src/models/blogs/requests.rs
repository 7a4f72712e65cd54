use serde::Deserialize;

fn default_published() -> bool {
    true
}

// 博客文章创建请求
#[derive(Debug, Deserialize)]
pub struct CreateBlogPostRequest {
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_published")]
    pub is_published: bool,
}

// 博客列表查询参数
#[derive(Debug, Clone, Deserialize)]
pub struct BlogListQuery {
    pub limit: Option<u64>,
}
