use std::sync::Arc;

use crate::models::{
    applications::{entities::Application, requests::CreateApplicationRequest},
    appointments::{
        entities::Appointment,
        requests::{AppointmentListScope, CreateAppointmentRequest},
    },
    blogs::{
        entities::BlogPost,
        requests::{BlogListQuery, CreateBlogPostRequest},
    },
    colleges::{
        entities::College,
        requests::{CollegeListQuery, CreateCollegeRequest},
    },
    courses::{
        entities::Course,
        requests::{CourseListQuery, CreateCourseRequest},
    },
    enquiries::{entities::Enquiry, requests::CreateEnquiryRequest},
    testimonials::{
        entities::Testimonial,
        requests::{CreateTestimonialRequest, TestimonialListQuery},
    },
    users::{
        entities::{User, UserRole},
        requests::CreateUserRequest,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 统计用户总数
    async fn count_users(&self) -> Result<u64>;
    // 按角色统计用户数
    async fn count_users_by_role(&self, role: &UserRole) -> Result<u64>;

    /// 学院管理方法
    // 创建学院
    async fn create_college(&self, college: CreateCollegeRequest) -> Result<College>;
    // 通过ID获取学院信息
    async fn get_college_by_id(&self, id: &str) -> Result<Option<College>>;
    // 列出学院（仅 active，支持 state/course_type 等值过滤）
    async fn list_colleges(&self, query: CollegeListQuery) -> Result<Vec<College>>;
    // 统计学院总数（含 inactive，种子数据存在性检查用）
    async fn count_colleges(&self) -> Result<u64>;
    // 统计 active 学院数
    async fn count_active_colleges(&self) -> Result<u64>;

    /// 课程管理方法
    // 创建课程
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    // 通过ID获取课程信息
    async fn get_course_by_id(&self, id: &str) -> Result<Option<Course>>;
    // 列出课程（仅 active）
    async fn list_courses(&self, query: CourseListQuery) -> Result<Vec<Course>>;

    /// 入学申请管理方法
    // 创建申请（状态 pending，申请日期为当天）
    async fn create_application(
        &self,
        student_id: &str,
        application: CreateApplicationRequest,
    ) -> Result<Application>;
    // 列出申请，可选按学生过滤
    async fn list_applications(&self, student_id: Option<&str>) -> Result<Vec<Application>>;
    // 统计申请总数
    async fn count_applications(&self) -> Result<u64>;

    /// 预约管理方法
    // 创建预约（状态 scheduled）
    async fn create_appointment(
        &self,
        student_id: &str,
        appointment: CreateAppointmentRequest,
    ) -> Result<Appointment>;
    // 按可见范围列出预约
    async fn list_appointments(&self, scope: AppointmentListScope) -> Result<Vec<Appointment>>;
    // 查找指定时段的 scheduled 预约（时段冲突检查）
    async fn find_scheduled_appointment(
        &self,
        date: chrono::NaiveDate,
        time: chrono::NaiveTime,
    ) -> Result<Option<Appointment>>;

    /// 咨询留言管理方法
    // 创建留言
    async fn create_enquiry(&self, enquiry: CreateEnquiryRequest) -> Result<Enquiry>;
    // 列出全部留言
    async fn list_enquiries(&self) -> Result<Vec<Enquiry>>;
    // 统计未解决留言数
    async fn count_unresolved_enquiries(&self) -> Result<u64>;

    /// 博客管理方法
    // 创建文章
    async fn create_blog_post(&self, post: CreateBlogPostRequest) -> Result<BlogPost>;
    // 列出已发布文章
    async fn list_blog_posts(&self, query: BlogListQuery) -> Result<Vec<BlogPost>>;

    /// 感言管理方法
    // 创建感言
    async fn create_testimonial(&self, testimonial: CreateTestimonialRequest)
    -> Result<Testimonial>;
    // 列出感言（可选仅 featured）
    async fn list_testimonials(&self, query: TestimonialListQuery) -> Result<Vec<Testimonial>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::UserRole;
    use sea_orm_storage::SeaOrmStorage;

    fn user_request(email: &str) -> CreateUserRequest {
        CreateUserRequest {
            email: email.to_string(),
            phone: None,
            password: "phc-hash".to_string(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            role: UserRole::Student,
        }
    }

    fn appointment_request(date: &str, time: &str) -> CreateAppointmentRequest {
        CreateAppointmentRequest {
            appointment_date: date.parse().expect("parse date"),
            appointment_time: time.parse().expect("parse time"),
            purpose: "Career counselling".to_string(),
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected_by_unique_index() {
        let storage = SeaOrmStorage::new_in_memory().await.expect("storage");

        storage
            .create_user(user_request("a@x.com"))
            .await
            .expect("first registration");

        // 同邮箱二次注册被唯一索引拒绝
        let second = storage.create_user(user_request("a@x.com")).await;
        assert!(second.is_err());

        // 其他邮箱不受影响
        storage
            .create_user(user_request("b@x.com"))
            .await
            .expect("different email");
        assert_eq!(storage.count_users().await.expect("count"), 2);
    }

    #[tokio::test]
    async fn test_scheduled_slot_occupied_after_booking() {
        let storage = SeaOrmStorage::new_in_memory().await.expect("storage");

        let student = storage
            .create_user(user_request("student@x.com"))
            .await
            .expect("create student");

        let date = "2026-09-01".parse().expect("parse date");
        let time = "10:00:00".parse().expect("parse time");

        // 预约前时段空闲
        let free = storage
            .find_scheduled_appointment(date, time)
            .await
            .expect("slot lookup");
        assert!(free.is_none());

        storage
            .create_appointment(&student.id, appointment_request("2026-09-01", "10:00:00"))
            .await
            .expect("book slot");

        // 完全相同的 (日期, 时间) 命中已存在的 scheduled 预约
        let taken = storage
            .find_scheduled_appointment(date, time)
            .await
            .expect("slot lookup");
        assert!(taken.is_some());

        // 其他时段仍然空闲
        let other_time = "11:00:00".parse().expect("parse time");
        let other = storage
            .find_scheduled_appointment(date, other_time)
            .await
            .expect("slot lookup");
        assert!(other.is_none());
    }
}
