use super::SeaOrmStorage;
use crate::entity::blog_posts::{ActiveModel, Column, Entity as BlogPosts};
use crate::errors::{EduMentorError, Result};
use crate::models::blogs::{
    entities::BlogPost,
    requests::{BlogListQuery, CreateBlogPostRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QuerySelect, Set};

/// 博客与感言列表的默认返回条数
pub(crate) const DEFAULT_FEED_LIMIT: u64 = 10;

impl SeaOrmStorage {
    pub async fn create_blog_post_impl(&self, req: CreateBlogPostRequest) -> Result<BlogPost> {
        let now = chrono::Utc::now().timestamp();

        let tags = serde_json::to_string(&req.tags)
            .map_err(|e| EduMentorError::serialization(format!("序列化标签失败: {e}")))?;

        let model = ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            title: Set(req.title),
            content: Set(req.content),
            author: Set(req.author),
            tags: Set(tags),
            is_published: Set(req.is_published),
            created_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduMentorError::database_operation(format!("创建博客文章失败: {e}")))?;

        Ok(result.into_blog_post())
    }

    /// 列出已发布的博客文章
    pub async fn list_blog_posts_impl(&self, query: BlogListQuery) -> Result<Vec<BlogPost>> {
        let limit = query.limit.unwrap_or(DEFAULT_FEED_LIMIT);

        let posts = BlogPosts::find()
            .filter(Column::IsPublished.eq(true))
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| EduMentorError::database_operation(format!("查询博客列表失败: {e}")))?;

        Ok(posts.into_iter().map(|m| m.into_blog_post()).collect())
    }
}
