use super::SeaOrmStorage;
use crate::entity::colleges::{ActiveModel, Column, Entity as Colleges};
use crate::errors::{EduMentorError, Result};
use crate::models::colleges::{
    entities::College,
    requests::{CollegeListQuery, CreateCollegeRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect, Set,
};

/// 列表查询的默认条数上限
pub(crate) const DEFAULT_COLLEGE_LIMIT: u64 = 50;

impl SeaOrmStorage {
    /// 创建学院
    pub async fn create_college_impl(&self, req: CreateCollegeRequest) -> Result<College> {
        let now = chrono::Utc::now().timestamp();
        let courses_json = serde_json::to_string(&req.courses)
            .map_err(|e| EduMentorError::serialization(format!("课程标签序列化失败: {e}")))?;

        let model = ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            name: Set(req.name),
            location: Set(req.location),
            state: Set(req.state),
            courses: Set(courses_json),
            fees_range: Set(req.fees_range),
            rating: Set(req.rating),
            description: Set(req.description),
            established_year: Set(req.established_year),
            is_active: Set(true),
            created_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduMentorError::database_operation(format!("创建学院失败: {e}")))?;

        Ok(result.into_college())
    }

    /// 通过 ID 获取学院
    pub async fn get_college_by_id_impl(&self, id: &str) -> Result<Option<College>> {
        let result = Colleges::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EduMentorError::database_operation(format!("查询学院失败: {e}")))?;

        Ok(result.map(|m| m.into_college()))
    }

    /// 列出学院（仅 active，等值过滤）
    pub async fn list_colleges_impl(&self, query: CollegeListQuery) -> Result<Vec<College>> {
        let limit = query.limit.unwrap_or(DEFAULT_COLLEGE_LIMIT);

        let mut select = Colleges::find().filter(Column::IsActive.eq(true));

        if let Some(ref state) = query.state {
            select = select.filter(Column::State.eq(state));
        }

        // 课程标签以 JSON 数组文本存储，按带引号的标签做包含匹配
        if let Some(ref course_type) = query.course_type {
            select = select.filter(Column::Courses.contains(format!("\"{course_type}\"")));
        }

        let colleges = select
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| EduMentorError::database_operation(format!("查询学院列表失败: {e}")))?;

        Ok(colleges.into_iter().map(|m| m.into_college()).collect())
    }

    /// 统计学院总数（含 inactive）
    pub async fn count_colleges_impl(&self) -> Result<u64> {
        Colleges::find()
            .count(&self.db)
            .await
            .map_err(|e| EduMentorError::database_operation(format!("统计学院失败: {e}")))
    }

    /// 统计 active 学院数
    pub async fn count_active_colleges_impl(&self) -> Result<u64> {
        Colleges::find()
            .filter(Column::IsActive.eq(true))
            .count(&self.db)
            .await
            .map_err(|e| EduMentorError::database_operation(format!("统计学院失败: {e}")))
    }
}
