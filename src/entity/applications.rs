//! 入学申请实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "applications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub student_id: String,
    pub college_id: String,
    pub course_id: String,
    pub status: String,
    /// 材料列表，JSON 数组文本
    pub documents: String,
    pub notes: Option<String>,
    /// date-only 字符串 (YYYY-MM-DD)
    pub applied_date: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::StudentId",
        to = "super::users::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::colleges::Entity",
        from = "Column::CollegeId",
        to = "super::colleges::Column::Id"
    )]
    College,
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::colleges::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::College.def()
    }
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_application(self) -> crate::models::applications::entities::Application {
        use crate::models::applications::entities::{Application, ApplicationStatus};
        use chrono::{DateTime, NaiveDate, Utc};

        Application {
            id: self.id,
            student_id: self.student_id,
            college_id: self.college_id,
            course_id: self.course_id,
            status: self
                .status
                .parse::<ApplicationStatus>()
                .unwrap_or(ApplicationStatus::Pending),
            documents: serde_json::from_str(&self.documents).unwrap_or_default(),
            notes: self.notes,
            applied_date: NaiveDate::parse_from_str(&self.applied_date, "%Y-%m-%d")
                .unwrap_or_default(),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
