use crate::models::common::pagination::PaginationQuery;
use serde::Deserialize;

/// 发送站内信请求
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub recipient_id: i64,
    pub subject: String,
    pub body: String,
}

/// 站内信列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize)]
pub struct MessageListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub unread_only: Option<bool>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct MessageListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    // 二选一：按收件人查收件箱，按发件人查发件箱
    pub recipient_id: Option<i64>,
    pub sender_id: Option<i64>,
    pub unread_only: Option<bool>,
}
