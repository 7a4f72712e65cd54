pub mod create;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::colleges::requests::{CollegeListQuery, CreateCollegeRequest};
use crate::storage::Storage;

pub struct CollegeService {
    storage: Option<Arc<dyn Storage>>,
}

impl CollegeService {
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

    // 学院列表（公开）
    pub async fn list_colleges(
        &self,
        request: &HttpRequest,
        query: CollegeListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_colleges(self, request, query).await
    }

    // 创建学院（咨询师/管理员）
    pub async fn create_college(
        &self,
        request: &HttpRequest,
        college_data: CreateCollegeRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_college(self, request, college_data).await
    }
}
