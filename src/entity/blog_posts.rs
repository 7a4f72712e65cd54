//! 博客文章实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "blog_posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    /// 标签列表，JSON 数组文本
    pub tags: String,
    pub is_published: bool,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_blog_post(self) -> crate::models::blogs::entities::BlogPost {
        use crate::models::blogs::entities::BlogPost;
        use chrono::{DateTime, Utc};

        BlogPost {
            id: self.id,
            title: self.title,
            content: self.content,
            author: self.author,
            tags: serde_json::from_str(&self.tags).unwrap_or_default(),
            is_published: self.is_published,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
