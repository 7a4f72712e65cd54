//! 学生感言实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "testimonials")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub student_name: String,
    pub course: String,
    pub college: String,
    pub message: String,
    pub rating: f64,
    pub photo_url: Option<String>,
    pub is_featured: bool,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_testimonial(self) -> crate::models::testimonials::entities::Testimonial {
        use crate::models::testimonials::entities::Testimonial;
        use chrono::{DateTime, Utc};

        Testimonial {
            id: self.id,
            student_name: self.student_name,
            course: self.course,
            college: self.college,
            message: self.message,
            rating: self.rating,
            photo_url: self.photo_url,
            is_featured: self.is_featured,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
