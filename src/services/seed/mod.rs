pub mod init_data;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct SeedService {
    storage: Option<Arc<dyn Storage>>,
}

impl SeedService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 写入示例数据（已有数据时为 no-op）
    pub async fn init_sample_data(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        init_data::handle_init_data(self, request).await
    }
}
