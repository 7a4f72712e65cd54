use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EnquiryService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_enquiries(
    service: &EnquiryService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_enquiries().await {
        Ok(enquiries) => Ok(HttpResponse::Ok().json(ApiResponse::success(enquiries, "OK"))),
        Err(e) => {
            error!("Failed to list enquiries: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list enquiries: {e}"),
                )),
            )
        }
    }
}
