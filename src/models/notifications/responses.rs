use super::entities::Notification;
use crate::models::common::pagination::PaginationInfo;
use serde::Serialize;

// 通知列表响应
#[derive(Debug, Serialize)]
pub struct NotificationListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<Notification>,
}

// 未读数量响应
#[derive(Debug, Serialize)]
pub struct UnreadCountResponse {
    pub unread: i64,
}
