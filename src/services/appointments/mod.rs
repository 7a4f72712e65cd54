pub mod create;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::appointments::requests::CreateAppointmentRequest;
use crate::storage::Storage;

pub struct AppointmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl AppointmentService {
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

    // 预约列表：学生看自己的，咨询师看分配给自己的，管理员看全部
    pub async fn list_appointments(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_appointments(self, request).await
    }

    // 学生预约咨询时段
    pub async fn create_appointment(
        &self,
        request: &HttpRequest,
        appointment_data: CreateAppointmentRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_appointment(self, request, appointment_data).await
    }
}
