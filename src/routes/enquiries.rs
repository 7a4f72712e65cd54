use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::enquiries::requests::CreateEnquiryRequest;
use crate::models::users::entities::UserRole;
use crate::services::EnquiryService;

// 懒加载的全局 EnquiryService 实例
static ENQUIRY_SERVICE: Lazy<EnquiryService> = Lazy::new(EnquiryService::new_lazy);

pub async fn list_enquiries(req: HttpRequest) -> ActixResult<HttpResponse> {
    ENQUIRY_SERVICE.list_enquiries(&req).await
}

pub async fn create_enquiry(
    req: HttpRequest,
    enquiry_data: web::Json<CreateEnquiryRequest>,
) -> ActixResult<HttpResponse> {
    ENQUIRY_SERVICE
        .create_enquiry(&req, enquiry_data.into_inner())
        .await
}

// 配置路由
pub fn configure_enquiries_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/enquiries").service(
            web::resource("")
                .route(
                    web::get()
                        .to(list_enquiries)
                        // 仅咨询师与管理员可查看留言
                        .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                        .wrap(middlewares::RequireJWT),
                )
                // 游客提交留言，无需认证
                .route(web::post().to(create_enquiry)),
        ),
    );
}
