use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::TestimonialService;
use crate::models::testimonials::requests::CreateTestimonialRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_rating;

pub async fn create_testimonial(
    service: &TestimonialService,
    request: &HttpRequest,
    testimonial_data: CreateTestimonialRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 评分范围校验
    if let Err(msg) = validate_rating(testimonial_data.rating) {
        return Ok(HttpResponse::UnprocessableEntity()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    match storage.create_testimonial(testimonial_data).await {
        Ok(testimonial) => {
            info!(
                "Testimonial from {} created successfully",
                testimonial.student_name
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                testimonial,
                "Testimonial created successfully",
            )))
        }
        Err(e) => {
            error!("Failed to create testimonial: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to create testimonial: {e}"),
                )),
            )
        }
    }
}
