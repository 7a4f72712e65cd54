use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::BlogService;
use crate::models::blogs::requests::BlogListQuery;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_blog_posts(
    service: &BlogService,
    request: &HttpRequest,
    query: BlogListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_blog_posts(query).await {
        Ok(posts) => Ok(HttpResponse::Ok().json(ApiResponse::success(posts, "OK"))),
        Err(e) => {
            error!("Failed to list blog posts: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list blog posts: {e}"),
                )),
            )
        }
    }
}
