use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ApplicationService;
use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_applications(
    service: &ApplicationService,
    request: &HttpRequest,
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

    // 学生仅可见自己的申请
    let student_filter = match user.role {
        UserRole::Student => Some(user.id.as_str()),
        UserRole::Counsellor | UserRole::Admin => None,
    };

    match storage.list_applications(student_filter).await {
        Ok(applications) => Ok(HttpResponse::Ok().json(ApiResponse::success(applications, "OK"))),
        Err(e) => {
            error!("Failed to list applications: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list applications: {e}"),
                )),
            )
        }
    }
}
