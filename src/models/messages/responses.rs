use super::entities::Message;
use crate::models::common::pagination::PaginationInfo;
use serde::Serialize;

// 站内信列表响应
#[derive(Debug, Serialize)]
pub struct MessageListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<Message>,
}
