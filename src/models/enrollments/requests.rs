use crate::models::common::pagination::PaginationQuery;
use serde::Deserialize;

/// 选课请求
#[derive(Debug, Deserialize)]
pub struct EnrollRequest {
    pub course_id: i64,
}

/// 选课列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize)]
pub struct EnrollmentListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct EnrollmentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub course_id: Option<i64>,
    pub student_id: Option<i64>,
}
