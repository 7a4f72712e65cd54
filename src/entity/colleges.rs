//! 学院实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "colleges")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub location: String,
    pub state: String,
    /// 课程类别标签，JSON 数组文本
    pub courses: String,
    pub fees_range: String,
    pub rating: f64,
    pub description: String,
    pub established_year: i32,
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
    pub fn into_college(self) -> crate::models::colleges::entities::College {
        use crate::models::colleges::entities::College;
        use chrono::{DateTime, Utc};

        College {
            id: self.id,
            name: self.name,
            location: self.location,
            state: self.state,
            courses: serde_json::from_str(&self.courses).unwrap_or_default(),
            fees_range: self.fees_range,
            rating: self.rating,
            description: self.description,
            established_year: self.established_year,
            is_active: self.is_active,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
