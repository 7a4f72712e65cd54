pub mod create;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::enquiries::requests::CreateEnquiryRequest;
use crate::storage::Storage;

pub struct EnquiryService {
    storage: Option<Arc<dyn Storage>>,
}

impl EnquiryService {
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

    // 留言列表（咨询师/管理员）
    pub async fn list_enquiries(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_enquiries(self, request).await
    }

    // 提交留言（公开接口）
    pub async fn create_enquiry(
        &self,
        request: &HttpRequest,
        enquiry_data: CreateEnquiryRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_enquiry(self, request, enquiry_data).await
    }
}
