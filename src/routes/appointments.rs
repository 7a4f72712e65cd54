use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::appointments::requests::CreateAppointmentRequest;
use crate::services::AppointmentService;

// 懒加载的全局 AppointmentService 实例
static APPOINTMENT_SERVICE: Lazy<AppointmentService> = Lazy::new(AppointmentService::new_lazy);

pub async fn list_appointments(req: HttpRequest) -> ActixResult<HttpResponse> {
    APPOINTMENT_SERVICE.list_appointments(&req).await
}

pub async fn create_appointment(
    req: HttpRequest,
    appointment_data: web::Json<CreateAppointmentRequest>,
) -> ActixResult<HttpResponse> {
    APPOINTMENT_SERVICE
        .create_appointment(&req, appointment_data.into_inner())
        .await
}

// 配置路由
pub fn configure_appointments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/appointments")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 按角色划定可见范围
                    .route(web::get().to(list_appointments))
                    // 学生预约时段，角色检查在服务层完成
                    .route(web::post().to(create_appointment)),
            ),
    );
}
