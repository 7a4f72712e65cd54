use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CollegeService;
use crate::models::colleges::requests::CollegeListQuery;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_colleges(
    service: &CollegeService,
    request: &HttpRequest,
    query: CollegeListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_colleges(query).await {
        Ok(colleges) => Ok(HttpResponse::Ok().json(ApiResponse::success(colleges, "OK"))),
        Err(e) => {
            error!("Failed to list colleges: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list colleges: {e}"),
                )),
            )
        }
    }
}
