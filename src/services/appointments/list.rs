use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AppointmentService;
use crate::middlewares::RequireJWT;
use crate::models::appointments::requests::AppointmentListScope;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_appointments(
    service: &AppointmentService,
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

    let scope = match user.role {
        UserRole::Student => AppointmentListScope::Student(user.id),
        UserRole::Counsellor => AppointmentListScope::Counsellor(user.id),
        UserRole::Admin => AppointmentListScope::All,
    };

    match storage.list_appointments(scope).await {
        Ok(appointments) => Ok(HttpResponse::Ok().json(ApiResponse::success(appointments, "OK"))),
        Err(e) => {
            error!("Failed to list appointments: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list appointments: {e}"),
                )),
            )
        }
    }
}
