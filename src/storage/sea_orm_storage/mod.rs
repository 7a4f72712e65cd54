//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod applications;
mod appointments;
mod blogs;
mod colleges;
mod courses;
mod enquiries;
mod testimonials;
mod users;

use crate::config::AppConfig;
use crate::errors::{EduMentorError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| EduMentorError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| EduMentorError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| EduMentorError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| EduMentorError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 测试用的独立内存数据库实例
    #[cfg(test)]
    pub(crate) async fn new_in_memory() -> Result<Self> {
        let db = Database::connect("sqlite::memory:")
            .await
            .map_err(|e| EduMentorError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Migrator::up(&db, None)
            .await
            .map_err(|e| EduMentorError::database_operation(format!("数据库迁移失败: {e}")))?;

        Ok(Self { db })
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(EduMentorError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: &str) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    async fn count_users_by_role(&self, role: &UserRole) -> Result<u64> {
        self.count_users_by_role_impl(role).await
    }

    // 学院模块
    async fn create_college(&self, college: CreateCollegeRequest) -> Result<College> {
        self.create_college_impl(college).await
    }

    async fn get_college_by_id(&self, id: &str) -> Result<Option<College>> {
        self.get_college_by_id_impl(id).await
    }

    async fn list_colleges(&self, query: CollegeListQuery) -> Result<Vec<College>> {
        self.list_colleges_impl(query).await
    }

    async fn count_colleges(&self) -> Result<u64> {
        self.count_colleges_impl().await
    }

    async fn count_active_colleges(&self) -> Result<u64> {
        self.count_active_colleges_impl().await
    }

    // 课程模块
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn get_course_by_id(&self, id: &str) -> Result<Option<Course>> {
        self.get_course_by_id_impl(id).await
    }

    async fn list_courses(&self, query: CourseListQuery) -> Result<Vec<Course>> {
        self.list_courses_impl(query).await
    }

    // 申请模块
    async fn create_application(
        &self,
        student_id: &str,
        application: CreateApplicationRequest,
    ) -> Result<Application> {
        self.create_application_impl(student_id, application).await
    }

    async fn list_applications(&self, student_id: Option<&str>) -> Result<Vec<Application>> {
        self.list_applications_impl(student_id).await
    }

    async fn count_applications(&self) -> Result<u64> {
        self.count_applications_impl().await
    }

    // 预约模块
    async fn create_appointment(
        &self,
        student_id: &str,
        appointment: CreateAppointmentRequest,
    ) -> Result<Appointment> {
        self.create_appointment_impl(student_id, appointment).await
    }

    async fn list_appointments(&self, scope: AppointmentListScope) -> Result<Vec<Appointment>> {
        self.list_appointments_impl(scope).await
    }

    async fn find_scheduled_appointment(
        &self,
        date: chrono::NaiveDate,
        time: chrono::NaiveTime,
    ) -> Result<Option<Appointment>> {
        self.find_scheduled_appointment_impl(date, time).await
    }

    // 留言模块
    async fn create_enquiry(&self, enquiry: CreateEnquiryRequest) -> Result<Enquiry> {
        self.create_enquiry_impl(enquiry).await
    }

    async fn list_enquiries(&self) -> Result<Vec<Enquiry>> {
        self.list_enquiries_impl().await
    }

    async fn count_unresolved_enquiries(&self) -> Result<u64> {
        self.count_unresolved_enquiries_impl().await
    }

    // 博客模块
    async fn create_blog_post(&self, post: CreateBlogPostRequest) -> Result<BlogPost> {
        self.create_blog_post_impl(post).await
    }

    async fn list_blog_posts(&self, query: BlogListQuery) -> Result<Vec<BlogPost>> {
        self.list_blog_posts_impl(query).await
    }

    // 感言模块
    async fn create_testimonial(
        &self,
        testimonial: CreateTestimonialRequest,
    ) -> Result<Testimonial> {
        self.create_testimonial_impl(testimonial).await
    }

    async fn list_testimonials(&self, query: TestimonialListQuery) -> Result<Vec<Testimonial>> {
        self.list_testimonials_impl(query).await
    }
}
