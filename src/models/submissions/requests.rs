use crate::models::common::pagination::PaginationQuery;
use serde::Deserialize;

/// 提交作业请求
#[derive(Debug, Deserialize)]
pub struct SubmitAssignmentRequest {
    pub content: String,
}

/// 评分请求
#[derive(Debug, Deserialize)]
pub struct GradeSubmissionRequest {
    pub score: f64,
    pub feedback: Option<String>,
}

/// 提交列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    /// 仅看未评分（讲师视角）
    pub ungraded_only: Option<bool>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct SubmissionListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub assignment_id: Option<i64>,
    pub student_id: Option<i64>,
    pub ungraded_only: Option<bool>,
}
