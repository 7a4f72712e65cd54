pub mod create;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::blogs::requests::{BlogListQuery, CreateBlogPostRequest};
use crate::storage::Storage;

pub struct BlogService {
    storage: Option<Arc<dyn Storage>>,
}

impl BlogService {
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

    // 已发布文章列表（公开）
    pub async fn list_blog_posts(
        &self,
        request: &HttpRequest,
        query: BlogListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_blog_posts(self, request, query).await
    }

    // 发布文章（咨询师/管理员）
    pub async fn create_blog_post(
        &self,
        request: &HttpRequest,
        post_data: CreateBlogPostRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_blog_post(self, request, post_data).await
    }
}
