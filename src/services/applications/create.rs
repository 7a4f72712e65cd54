use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ApplicationService;
use crate::middlewares::RequireJWT;
use crate::models::applications::requests::CreateApplicationRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_application(
    service: &ApplicationService,
    request: &HttpRequest,
    application_data: CreateApplicationRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Authentication required",
            )));
        }
    };

    // 仅学生可提交申请
    if user.role != UserRole::Student {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "Only students can create applications",
        )));
    }

    // 外键引用校验：学院与课程必须存在
    match storage.get_college_by_id(&application_data.college_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CollegeNotFound,
                "College not found",
            )));
        }
        Err(e) => {
            error!("Failed to look up college: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to create application: {e}"),
                )),
            );
        }
    }

    match storage.get_course_by_id(&application_data.course_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "Course not found",
            )));
        }
        Err(e) => {
            error!("Failed to look up course: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to create application: {e}"),
                )),
            );
        }
    }

    match storage.create_application(&user.id, application_data).await {
        Ok(application) => {
            info!(
                "Application {} created by student {}",
                application.id, user.id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                application,
                "Application created successfully",
            )))
        }
        Err(e) => {
            error!("Failed to create application: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to create application: {e}"),
                )),
            )
        }
    }
}
