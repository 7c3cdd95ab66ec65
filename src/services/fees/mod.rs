pub mod create;
pub mod get;
pub mod list;
pub mod pay;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::fees::requests::{CreateFeeRequest, CreatePaymentRequest, FeeListParams};
use crate::storage::Storage;

pub struct FeeService {
    storage: Option<Arc<dyn Storage>>,
}

impl FeeService {
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

    // 开账单（管理员）
    pub async fn create_fee(
        &self,
        request: &HttpRequest,
        data: CreateFeeRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_fee(self, request, data).await
    }

    // 账单详情（含缴费记录）
    pub async fn get_fee(&self, request: &HttpRequest, fee_id: i64) -> ActixResult<HttpResponse> {
        get::get_fee(self, request, fee_id).await
    }

    // 账单列表（学生只看自己的）
    pub async fn list_fees(
        &self,
        request: &HttpRequest,
        params: FeeListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_fees(self, request, params).await
    }

    // 缴费
    pub async fn pay_fee(
        &self,
        request: &HttpRequest,
        fee_id: i64,
        data: CreatePaymentRequest,
    ) -> ActixResult<HttpResponse> {
        pay::pay_fee(self, request, fee_id, data).await
    }
}
