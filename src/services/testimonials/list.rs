use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::TestimonialService;
use crate::models::testimonials::requests::TestimonialListQuery;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_testimonials(
    service: &TestimonialService,
    request: &HttpRequest,
    query: TestimonialListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_testimonials(query).await {
        Ok(testimonials) => Ok(HttpResponse::Ok().json(ApiResponse::success(testimonials, "OK"))),
        Err(e) => {
            error!("Failed to list testimonials: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list testimonials: {e}"),
                )),
            )
        }
    }
}
