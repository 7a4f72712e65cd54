pub mod create;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::testimonials::requests::{CreateTestimonialRequest, TestimonialListQuery};
use crate::storage::Storage;

pub struct TestimonialService {
    storage: Option<Arc<dyn Storage>>,
}

impl TestimonialService {
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

    // 感言列表（公开）
    pub async fn list_testimonials(
        &self,
        request: &HttpRequest,
        query: TestimonialListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_testimonials(self, request, query).await
    }

    // 创建感言（咨询师/管理员）
    pub async fn create_testimonial(
        &self,
        request: &HttpRequest,
        testimonial_data: CreateTestimonialRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_testimonial(self, request, testimonial_data).await
    }
}
