//! 课程实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub course_type: String,
    pub duration: String,
    pub description: String,
    pub eligibility: String,
    /// 职业方向列表，JSON 数组文本
    pub career_opportunities: String,
    pub is_active: bool,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::applications::Entity")]
    Applications,
}

impl Related<super::applications::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Applications.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_course(self) -> crate::models::courses::entities::Course {
        use crate::models::courses::entities::{Course, CourseType};
        use chrono::{DateTime, Utc};

        Course {
            id: self.id,
            name: self.name,
            course_type: self
                .course_type
                .parse::<CourseType>()
                .unwrap_or(CourseType::BTech),
            duration: self.duration,
            description: self.description,
            eligibility: self.eligibility,
            career_opportunities: serde_json::from_str(&self.career_opportunities)
                .unwrap_or_default(),
            is_active: self.is_active,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
