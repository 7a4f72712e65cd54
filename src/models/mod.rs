//! 数据模型定义
//!
//! 业务实体、请求/响应 DTO 以及统一的 API 响应结构。

pub mod admin;
pub mod applications;
pub mod appointments;
pub mod auth;
pub mod blogs;
pub mod colleges;
pub mod common;
pub mod courses;
pub mod enquiries;
pub mod testimonials;
pub mod users;

pub use common::response::ApiResponse;

/// 程序启动时间，注入到 app data 中
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// 业务错误码
///
/// 编码规则：HTTP 状态码 * 100 + 序号，0 表示成功。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 400
    BadRequest = 40000,
    UserEmailAlreadyExists = 40001,
    AppointmentSlotTaken = 40002,

    // 401
    Unauthorized = 40100,
    AuthFailed = 40101,

    // 403
    Forbidden = 40300,

    // 404
    NotFound = 40400,
    UserNotFound = 40401,
    CollegeNotFound = 40402,
    CourseNotFound = 40403,

    // 422
    ValidationFailed = 42200,

    // 500
    InternalServerError = 50000,
    RegisterFailed = 50001,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::UserEmailAlreadyExists as i32, 40001);
        assert_eq!(ErrorCode::ValidationFailed as i32, 42200);
        assert_eq!(ErrorCode::InternalServerError as i32, 50000);
    }
}
