use super::blogs::DEFAULT_FEED_LIMIT;
use super::SeaOrmStorage;
use crate::entity::testimonials::{ActiveModel, Column, Entity as Testimonials};
use crate::errors::{EduMentorError, Result};
use crate::models::testimonials::{
    entities::Testimonial,
    requests::{CreateTestimonialRequest, TestimonialListQuery},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QuerySelect, Set};

impl SeaOrmStorage {
    pub async fn create_testimonial_impl(
        &self,
        req: CreateTestimonialRequest,
    ) -> Result<Testimonial> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            student_name: Set(req.student_name),
            course: Set(req.course),
            college: Set(req.college),
            message: Set(req.message),
            rating: Set(req.rating),
            photo_url: Set(req.photo_url),
            is_featured: Set(req.is_featured),
            created_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduMentorError::database_operation(format!("创建学生感言失败: {e}")))?;

        Ok(result.into_testimonial())
    }

    pub async fn list_testimonials_impl(
        &self,
        query: TestimonialListQuery,
    ) -> Result<Vec<Testimonial>> {
        let limit = query.limit.unwrap_or(DEFAULT_FEED_LIMIT);

        let mut select = Testimonials::find();
        if query.featured_only {
            select = select.filter(Column::IsFeatured.eq(true));
        }

        let testimonials = select
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| EduMentorError::database_operation(format!("查询感言列表失败: {e}")))?;

        Ok(testimonials
            .into_iter()
            .map(|m| m.into_testimonial())
            .collect())
    }
}
