use super::entities::Submission;
use crate::models::common::pagination::PaginationInfo;
use serde::Serialize;

// 提交列表响应
#[derive(Debug, Serialize)]
pub struct SubmissionListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<Submission>,
}
