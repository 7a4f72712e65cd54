use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AdminService;
use crate::models::admin::responses::AdminStatsResponse;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_get_stats(
    service: &AdminService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 四项计数独立读取，失败任何一项整体失败
    let stats = async {
        Ok::<AdminStatsResponse, crate::errors::EduMentorError>(AdminStatsResponse {
            total_students: storage.count_users_by_role(&UserRole::Student).await?,
            total_applications: storage.count_applications().await?,
            total_colleges: storage.count_active_colleges().await?,
            pending_enquiries: storage.count_unresolved_enquiries().await?,
        })
    }
    .await;

    match stats {
        Ok(stats) => Ok(HttpResponse::Ok().json(ApiResponse::success(stats, "OK"))),
        Err(e) => {
            error!("Failed to collect admin stats: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to collect stats: {e}"),
                )),
            )
        }
    }
}
