use super::entities::Application;
use crate::models::common::pagination::PaginationInfo;
use serde::Serialize;

// 入学申请列表响应
#[derive(Debug, Serialize)]
pub struct ApplicationListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<Application>,
}
