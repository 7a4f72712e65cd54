use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CollegeService;
use crate::models::colleges::requests::CreateCollegeRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_rating;

pub async fn create_college(
    service: &CollegeService,
    request: &HttpRequest,
    college_data: CreateCollegeRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 评分范围校验
    if let Err(msg) = validate_rating(college_data.rating) {
        return Ok(HttpResponse::UnprocessableEntity()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    match storage.create_college(college_data).await {
        Ok(college) => {
            info!("College {} created successfully", college.name);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(college, "College created successfully")))
        }
        Err(e) => {
            error!("Failed to create college: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to create college: {e}"),
                )),
            )
        }
    }
}
