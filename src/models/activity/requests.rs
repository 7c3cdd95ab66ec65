use crate::models::common::pagination::PaginationQuery;
use serde::Deserialize;

/// 操作日志查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize)]
pub struct ActivityLogListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub user_id: Option<i64>,
    pub action: Option<String>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct ActivityLogListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub user_id: Option<i64>,
    pub action: Option<String>,
}
