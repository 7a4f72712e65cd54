use super::SeaOrmStorage;
use crate::entity::courses::{ActiveModel, Column, Entity as Courses};
use crate::errors::{EduMentorError, Result};
use crate::models::courses::{
    entities::Course,
    requests::{CourseListQuery, CreateCourseRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QuerySelect, Set};

use super::colleges::DEFAULT_COLLEGE_LIMIT;

impl SeaOrmStorage {
    /// 创建课程
    pub async fn create_course_impl(&self, req: CreateCourseRequest) -> Result<Course> {
        let now = chrono::Utc::now().timestamp();
        let careers_json = serde_json::to_string(&req.career_opportunities)
            .map_err(|e| EduMentorError::serialization(format!("职业方向序列化失败: {e}")))?;

        let model = ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            name: Set(req.name),
            course_type: Set(req.course_type.to_string()),
            duration: Set(req.duration),
            description: Set(req.description),
            eligibility: Set(req.eligibility),
            career_opportunities: Set(careers_json),
            is_active: Set(true),
            created_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduMentorError::database_operation(format!("创建课程失败: {e}")))?;

        Ok(result.into_course())
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, id: &str) -> Result<Option<Course>> {
        let result = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EduMentorError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 列出课程（仅 active）
    pub async fn list_courses_impl(&self, query: CourseListQuery) -> Result<Vec<Course>> {
        let limit = query.limit.unwrap_or(DEFAULT_COLLEGE_LIMIT);

        let mut select = Courses::find().filter(Column::IsActive.eq(true));

        if let Some(ref course_type) = query.course_type {
            select = select.filter(Column::CourseType.eq(course_type.to_string()));
        }

        let courses = select
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| EduMentorError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(courses.into_iter().map(|m| m.into_course()).collect())
    }
}
