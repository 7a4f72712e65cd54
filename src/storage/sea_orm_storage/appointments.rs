use super::SeaOrmStorage;
use crate::entity::appointments::{ActiveModel, Column, Entity as Appointments};
use crate::errors::{EduMentorError, Result};
use crate::models::appointments::{
    entities::{Appointment, AppointmentStatus},
    requests::{AppointmentListScope, CreateAppointmentRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 创建预约（状态 scheduled，咨询师后续分配）
    pub async fn create_appointment_impl(
        &self,
        student_id: &str,
        req: CreateAppointmentRequest,
    ) -> Result<Appointment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            student_id: Set(student_id.to_string()),
            counsellor_id: Set(None),
            appointment_date: Set(req.appointment_date.format("%Y-%m-%d").to_string()),
            appointment_time: Set(req.appointment_time.format("%H:%M:%S").to_string()),
            purpose: Set(req.purpose),
            status: Set(AppointmentStatus::Scheduled.to_string()),
            notes: Set(req.notes),
            created_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduMentorError::database_operation(format!("创建预约失败: {e}")))?;

        Ok(result.into_appointment())
    }

    /// 按可见范围列出预约
    pub async fn list_appointments_impl(
        &self,
        scope: AppointmentListScope,
    ) -> Result<Vec<Appointment>> {
        let mut select = Appointments::find();

        match scope {
            AppointmentListScope::All => {}
            AppointmentListScope::Student(student_id) => {
                select = select.filter(Column::StudentId.eq(student_id));
            }
            AppointmentListScope::Counsellor(counsellor_id) => {
                select = select.filter(Column::CounsellorId.eq(counsellor_id));
            }
        }

        let appointments = select
            .all(&self.db)
            .await
            .map_err(|e| EduMentorError::database_operation(format!("查询预约列表失败: {e}")))?;

        Ok(appointments
            .into_iter()
            .map(|m| m.into_appointment())
            .collect())
    }

    /// 查找指定 (date, time) 时段的 scheduled 预约
    ///
    /// 时段冲突检查与插入是两次独立调用，并发下存在竞态（见设计文档）。
    pub async fn find_scheduled_appointment_impl(
        &self,
        date: chrono::NaiveDate,
        time: chrono::NaiveTime,
    ) -> Result<Option<Appointment>> {
        let result = Appointments::find()
            .filter(Column::AppointmentDate.eq(date.format("%Y-%m-%d").to_string()))
            .filter(Column::AppointmentTime.eq(time.format("%H:%M:%S").to_string()))
            .filter(Column::Status.eq(AppointmentStatus::Scheduled.to_string()))
            .one(&self.db)
            .await
            .map_err(|e| EduMentorError::database_operation(format!("查询预约时段失败: {e}")))?;

        Ok(result.map(|m| m.into_appointment()))
    }
}
