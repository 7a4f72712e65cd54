use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::blogs::requests::{BlogListQuery, CreateBlogPostRequest};
use crate::models::users::entities::UserRole;
use crate::services::BlogService;

// 懒加载的全局 BlogService 实例
static BLOG_SERVICE: Lazy<BlogService> = Lazy::new(BlogService::new_lazy);

pub async fn list_blog_posts(
    req: HttpRequest,
    query: web::Query<BlogListQuery>,
) -> ActixResult<HttpResponse> {
    BLOG_SERVICE.list_blog_posts(&req, query.into_inner()).await
}

pub async fn create_blog_post(
    req: HttpRequest,
    post_data: web::Json<CreateBlogPostRequest>,
) -> ActixResult<HttpResponse> {
    BLOG_SERVICE
        .create_blog_post(&req, post_data.into_inner())
        .await
}

// 配置路由
pub fn configure_blogs_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/blogs").service(
            web::resource("")
                // 公开的已发布文章列表
                .route(web::get().to(list_blog_posts))
                .route(
                    web::post()
                        .to(create_blog_post)
                        // 咨询师与管理员可发布文章
                        .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                        .wrap(middlewares::RequireJWT),
                ),
        ),
    );
}
