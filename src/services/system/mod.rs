pub mod periods;
pub mod settings;
pub mod settings_cache;

pub use settings_cache::DynamicConfig;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::system::requests::{CreateRegistrationPeriodRequest, UpdateSettingsRequest};
use crate::storage::Storage;

pub struct SystemService {
    storage: Option<Arc<dyn Storage>>,
}

impl SystemService {
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

    // 系统设置列表（管理员）
    pub async fn list_settings(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        settings::list_settings(self, request).await
    }

    // 批量更新系统设置（管理员）
    pub async fn update_settings(
        &self,
        request: &HttpRequest,
        data: UpdateSettingsRequest,
    ) -> ActixResult<HttpResponse> {
        settings::update_settings(self, request, data).await
    }

    // 创建选课时间窗（管理员）
    pub async fn create_registration_period(
        &self,
        request: &HttpRequest,
        data: CreateRegistrationPeriodRequest,
    ) -> ActixResult<HttpResponse> {
        periods::create_registration_period(self, request, data).await
    }

    // 时间窗列表
    pub async fn list_registration_periods(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        periods::list_registration_periods(self, request).await
    }

    // 激活 / 停用时间窗（管理员）
    pub async fn set_period_active(
        &self,
        request: &HttpRequest,
        period_id: i64,
        active: bool,
    ) -> ActixResult<HttpResponse> {
        periods::set_period_active(self, request, period_id, active).await
    }

    // 当前开放的时间窗
    pub async fn current_registration_period(
        &self,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        periods::current_registration_period(self, request).await
    }
}
