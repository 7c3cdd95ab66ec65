use super::entities::ServiceRequest;
use crate::models::common::pagination::PaginationInfo;
use serde::Serialize;

// 申请列表响应
#[derive(Debug, Serialize)]
pub struct ServiceRequestListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<ServiceRequest>,
}
