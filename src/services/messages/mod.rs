pub mod get;
pub mod list;
pub mod send;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::messages::requests::{MessageListParams, SendMessageRequest};
use crate::storage::Storage;

pub struct MessageService {
    storage: Option<Arc<dyn Storage>>,
}

impl MessageService {
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

    // 发送站内信
    pub async fn send_message(
        &self,
        request: &HttpRequest,
        data: SendMessageRequest,
    ) -> ActixResult<HttpResponse> {
        send::send_message(self, request, data).await
    }

    // 收件箱
    pub async fn list_inbox(
        &self,
        request: &HttpRequest,
        params: MessageListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_inbox(self, request, params).await
    }

    // 发件箱
    pub async fn list_outbox(
        &self,
        request: &HttpRequest,
        params: MessageListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_outbox(self, request, params).await
    }

    // 站内信详情（收件人打开时自动标记已读）
    pub async fn get_message(
        &self,
        request: &HttpRequest,
        message_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_message(self, request, message_id).await
    }

    // 标记已读
    pub async fn mark_read(
        &self,
        request: &HttpRequest,
        message_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::mark_read(self, request, message_id).await
    }
}
