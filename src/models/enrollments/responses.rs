use super::entities::Enrollment;
use crate::models::common::pagination::PaginationInfo;
use serde::Serialize;

// 选课列表响应
#[derive(Debug, Serialize)]
pub struct EnrollmentListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<Enrollment>,
}
