use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::applications::requests::CreateApplicationRequest;
use crate::services::ApplicationService;

// 懒加载的全局 ApplicationService 实例
static APPLICATION_SERVICE: Lazy<ApplicationService> = Lazy::new(ApplicationService::new_lazy);

pub async fn list_applications(req: HttpRequest) -> ActixResult<HttpResponse> {
    APPLICATION_SERVICE.list_applications(&req).await
}

pub async fn create_application(
    req: HttpRequest,
    application_data: web::Json<CreateApplicationRequest>,
) -> ActixResult<HttpResponse> {
    APPLICATION_SERVICE
        .create_application(&req, application_data.into_inner())
        .await
}

// 配置路由
pub fn configure_applications_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/applications")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 学生查看自己的申请，咨询师/管理员查看全部
                    .route(web::get().to(list_applications))
                    // 学生提交申请，角色检查在服务层完成
                    .route(web::post().to(create_application)),
            ),
    );
}
