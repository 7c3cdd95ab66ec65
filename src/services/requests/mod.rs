pub mod create;
pub mod decide;
pub mod get;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::requests::requests::{
    CreateServiceRequest, DecideRequestRequest, ServiceRequestListParams,
};
use crate::storage::Storage;

pub struct ServiceRequestService {
    storage: Option<Arc<dyn Storage>>,
}

impl ServiceRequestService {
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

    // 学生提交自助申请
    pub async fn create_request(
        &self,
        request: &HttpRequest,
        data: CreateServiceRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_request(self, request, data).await
    }

    // 申请详情
    pub async fn get_request(
        &self,
        request: &HttpRequest,
        request_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_request(self, request, request_id).await
    }

    // 申请列表（学生只看自己的）
    pub async fn list_requests(
        &self,
        request: &HttpRequest,
        params: ServiceRequestListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_requests(self, request, params).await
    }

    // 审批（管理员）
    pub async fn decide_request(
        &self,
        request: &HttpRequest,
        request_id: i64,
        data: DecideRequestRequest,
    ) -> ActixResult<HttpResponse> {
        decide::decide_request(self, request, request_id, data).await
    }
}
