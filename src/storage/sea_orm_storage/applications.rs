use super::SeaOrmStorage;
use crate::entity::applications::{ActiveModel, Column, Entity as Applications};
use crate::errors::{EduMentorError, Result};
use crate::models::applications::{
    entities::{Application, ApplicationStatus},
    requests::CreateApplicationRequest,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 创建入学申请（状态 pending，申请日期为当天）
    pub async fn create_application_impl(
        &self,
        student_id: &str,
        req: CreateApplicationRequest,
    ) -> Result<Application> {
        let now = chrono::Utc::now();
        let documents_json = serde_json::to_string(&req.documents)
            .map_err(|e| EduMentorError::serialization(format!("材料列表序列化失败: {e}")))?;

        let model = ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            student_id: Set(student_id.to_string()),
            college_id: Set(req.college_id),
            course_id: Set(req.course_id),
            status: Set(ApplicationStatus::Pending.to_string()),
            documents: Set(documents_json),
            notes: Set(req.notes),
            applied_date: Set(now.date_naive().format("%Y-%m-%d").to_string()),
            created_at: Set(now.timestamp()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduMentorError::database_operation(format!("创建申请失败: {e}")))?;

        Ok(result.into_application())
    }

    /// 列出申请，可选按学生过滤
    pub async fn list_applications_impl(
        &self,
        student_id: Option<&str>,
    ) -> Result<Vec<Application>> {
        let mut select = Applications::find();

        if let Some(student_id) = student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        let applications = select
            .all(&self.db)
            .await
            .map_err(|e| EduMentorError::database_operation(format!("查询申请列表失败: {e}")))?;

        Ok(applications
            .into_iter()
            .map(|m| m.into_application())
            .collect())
    }

    /// 统计申请总数
    pub async fn count_applications_impl(&self) -> Result<u64> {
        Applications::find()
            .count(&self.db)
            .await
            .map_err(|e| EduMentorError::database_operation(format!("统计申请失败: {e}")))
    }
}
