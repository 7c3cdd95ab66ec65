use super::entities::{RequestKind, RequestStatus};
use crate::models::common::pagination::PaginationQuery;
use serde::Deserialize;

/// 提交自助申请
#[derive(Debug, Deserialize)]
pub struct CreateServiceRequest {
    pub kind: RequestKind,
    pub details: Option<String>,
}

/// 审批请求
#[derive(Debug, Deserialize)]
pub struct DecideRequestRequest {
    // true 批准，false 驳回
    pub approve: bool,
    pub remark: Option<String>,
}

/// 申请列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceRequestListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub kind: Option<RequestKind>,
    pub status: Option<RequestStatus>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct ServiceRequestListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub student_id: Option<i64>,
    pub kind: Option<RequestKind>,
    pub status: Option<RequestStatus>,
}
