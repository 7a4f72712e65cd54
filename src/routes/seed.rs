use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::SeedService;

// 懒加载的全局 SeedService 实例
static SEED_SERVICE: Lazy<SeedService> = Lazy::new(SeedService::new_lazy);

pub async fn init_data(req: HttpRequest) -> ActixResult<HttpResponse> {
    SEED_SERVICE.init_sample_data(&req).await
}

// 配置路由
pub fn configure_seed_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/init-data", web::post().to(init_data));
}
