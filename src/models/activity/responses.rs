use super::entities::ActivityLog;
use crate::models::common::pagination::PaginationInfo;
use serde::Serialize;

// 操作日志列表响应
#[derive(Debug, Serialize)]
pub struct ActivityLogListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<ActivityLog>,
}
