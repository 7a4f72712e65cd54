use super::SeaOrmStorage;
use crate::entity::enquiries::{ActiveModel, Column, Entity as Enquiries};
use crate::errors::{EduMentorError, Result};
use crate::models::enquiries::{entities::Enquiry, requests::CreateEnquiryRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};

impl SeaOrmStorage {
    pub async fn create_enquiry_impl(&self, req: CreateEnquiryRequest) -> Result<Enquiry> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            name: Set(req.name),
            email: Set(req.email),
            phone: Set(req.phone),
            subject: Set(req.subject),
            message: Set(req.message),
            is_resolved: Set(false),
            created_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduMentorError::database_operation(format!("创建咨询留言失败: {e}")))?;

        Ok(result.into_enquiry())
    }

    pub async fn list_enquiries_impl(&self) -> Result<Vec<Enquiry>> {
        let enquiries = Enquiries::find()
            .all(&self.db)
            .await
            .map_err(|e| EduMentorError::database_operation(format!("查询咨询留言失败: {e}")))?;

        Ok(enquiries.into_iter().map(|m| m.into_enquiry()).collect())
    }

    pub async fn count_unresolved_enquiries_impl(&self) -> Result<u64> {
        Enquiries::find()
            .filter(Column::IsResolved.eq(false))
            .count(&self.db)
            .await
            .map_err(|e| EduMentorError::database_operation(format!("统计未处理咨询失败: {e}")))
    }
}
