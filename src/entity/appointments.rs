//! 咨询预约实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "appointments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub student_id: String,
    pub counsellor_id: Option<String>,
    /// date-only 字符串 (YYYY-MM-DD)
    pub appointment_date: String,
    /// time-only 字符串 (HH:MM:SS)
    pub appointment_time: String,
    pub purpose: String,
    pub status: String,
    pub notes: Option<String>,
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
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_appointment(self) -> crate::models::appointments::entities::Appointment {
        use crate::models::appointments::entities::{Appointment, AppointmentStatus};
        use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

        Appointment {
            id: self.id,
            student_id: self.student_id,
            counsellor_id: self.counsellor_id,
            appointment_date: NaiveDate::parse_from_str(&self.appointment_date, "%Y-%m-%d")
                .unwrap_or_default(),
            appointment_time: NaiveTime::parse_from_str(&self.appointment_time, "%H:%M:%S")
                .unwrap_or_default(),
            purpose: self.purpose,
            status: self
                .status
                .parse::<AppointmentStatus>()
                .unwrap_or(AppointmentStatus::Scheduled),
            notes: self.notes,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
