use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::testimonials::requests::{CreateTestimonialRequest, TestimonialListQuery};
use crate::models::users::entities::UserRole;
use crate::services::TestimonialService;

// 懒加载的全局 TestimonialService 实例
static TESTIMONIAL_SERVICE: Lazy<TestimonialService> = Lazy::new(TestimonialService::new_lazy);

pub async fn list_testimonials(
    req: HttpRequest,
    query: web::Query<TestimonialListQuery>,
) -> ActixResult<HttpResponse> {
    TESTIMONIAL_SERVICE
        .list_testimonials(&req, query.into_inner())
        .await
}

pub async fn create_testimonial(
    req: HttpRequest,
    testimonial_data: web::Json<CreateTestimonialRequest>,
) -> ActixResult<HttpResponse> {
    TESTIMONIAL_SERVICE
        .create_testimonial(&req, testimonial_data.into_inner())
        .await
}

// 配置路由
pub fn configure_testimonials_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/testimonials").service(
            web::resource("")
                // 公开的感言列表
                .route(web::get().to(list_testimonials))
                .route(
                    web::post()
                        .to(create_testimonial)
                        // 咨询师与管理员可录入感言
                        .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                        .wrap(middlewares::RequireJWT),
                ),
        ),
    );
}
