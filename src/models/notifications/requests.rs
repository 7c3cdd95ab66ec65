use crate::models::common::pagination::PaginationQuery;
use serde::Deserialize;

/// 通知列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub unread_only: Option<bool>,
}
