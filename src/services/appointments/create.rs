use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AppointmentService;
use crate::middlewares::RequireJWT;
use crate::models::appointments::requests::CreateAppointmentRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_appointment(
    service: &AppointmentService,
    request: &HttpRequest,
    appointment_data: CreateAppointmentRequest,
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

    // 仅学生可预约
    if user.role != UserRole::Student {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "Only students can book appointments",
        )));
    }

    // 时段冲突检查：同一 (日期, 时间) 只允许一条 scheduled 预约。
    // 检查与插入是两次调用，并发下可能双订。
    match storage
        .find_scheduled_appointment(
            appointment_data.appointment_date,
            appointment_data.appointment_time,
        )
        .await
    {
        Ok(Some(_)) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::AppointmentSlotTaken,
                "Appointment slot already booked",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            error!("Failed to check appointment slot: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to book appointment: {e}"),
                )),
            );
        }
    }

    match storage.create_appointment(&user.id, appointment_data).await {
        Ok(appointment) => {
            info!(
                "Appointment {} booked by student {}",
                appointment.id, user.id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                appointment,
                "Appointment booked successfully",
            )))
        }
        Err(e) => {
            error!("Failed to book appointment: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to book appointment: {e}"),
                )),
            )
        }
    }
}
