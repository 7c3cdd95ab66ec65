pub mod list;
pub mod review;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::applications::requests::{
    ApplicationListParams, CreateApplicationRequest, ReviewApplicationRequest,
};
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

    // 提交入学申请（公开接口，无需登录）
    pub async fn submit_application(
        &self,
        request: &HttpRequest,
        data: CreateApplicationRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_application(self, request, data).await
    }

    // 申请详情（管理员）
    pub async fn get_application(
        &self,
        request: &HttpRequest,
        application_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::get_application(self, request, application_id).await
    }

    // 申请列表（管理员）
    pub async fn list_applications(
        &self,
        request: &HttpRequest,
        params: ApplicationListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_applications(self, request, params).await
    }

    // 录取 / 拒绝（管理员）
    pub async fn review_application(
        &self,
        request: &HttpRequest,
        application_id: i64,
        data: ReviewApplicationRequest,
    ) -> ActixResult<HttpResponse> {
        review::review_application(self, request, application_id, data).await
    }
}
