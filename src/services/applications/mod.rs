pub mod create;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::applications::requests::CreateApplicationRequest;
use crate::storage::Storage;

pub struct ApplicationService {
    storage: Option<Arc<dyn Storage>>,
}

impl ApplicationService {
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

    // 申请列表：学生只能看到自己的，咨询师/管理员看到全部
    pub async fn list_applications(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_applications(self, request).await
    }

    // 学生提交入学申请
    pub async fn create_application(
        &self,
        request: &HttpRequest,
        application_data: CreateApplicationRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_application(self, request, application_data).await
    }
}
