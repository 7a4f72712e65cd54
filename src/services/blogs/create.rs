use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::BlogService;
use crate::models::blogs::requests::CreateBlogPostRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_blog_post(
    service: &BlogService,
    request: &HttpRequest,
    post_data: CreateBlogPostRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.create_blog_post(post_data).await {
        Ok(post) => {
            info!("Blog post {} created successfully", post.title);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(post, "Blog post created successfully")))
        }
        Err(e) => {
            error!("Failed to create blog post: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to create blog post: {e}"),
                )),
            )
        }
    }
}
