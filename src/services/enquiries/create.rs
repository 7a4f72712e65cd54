use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::EnquiryService;
use crate::models::enquiries::requests::CreateEnquiryRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::{validate_email, validate_phone};

pub async fn create_enquiry(
    service: &EnquiryService,
    request: &HttpRequest,
    enquiry_data: CreateEnquiryRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 公开接口，联系方式必须可用
    if let Err(msg) = validate_email(&enquiry_data.email) {
        return Ok(HttpResponse::UnprocessableEntity()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }
    if let Err(msg) = validate_phone(&enquiry_data.phone) {
        return Ok(HttpResponse::UnprocessableEntity()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    match storage.create_enquiry(enquiry_data).await {
        Ok(enquiry) => {
            info!("Enquiry {} submitted by {}", enquiry.id, enquiry.email);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(enquiry, "Enquiry submitted successfully")))
        }
        Err(e) => {
            error!("Failed to submit enquiry: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to submit enquiry: {e}"),
                )),
            )
        }
    }
}
