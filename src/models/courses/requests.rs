use crate::models::common::pagination::PaginationQuery;
use serde::Deserialize;

/// 创建课程请求
#[derive(Debug, Deserialize)]
pub struct CreateCourseRequest {
    pub code: String,
    pub title: String,
    pub description: Option<String>,
    pub lecturer_id: i64,
    pub credit_units: i32,
    pub semester: String,
    pub max_students: Option<i32>,
}

/// 更新课程请求
#[derive(Debug, Deserialize)]
pub struct UpdateCourseRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub lecturer_id: Option<i64>,
    pub credit_units: Option<i32>,
    pub semester: Option<String>,
    pub max_students: Option<i32>,
}

/// 课程列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize)]
pub struct CourseListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub semester: Option<String>,
    pub lecturer_id: Option<i64>,
    pub search: Option<String>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct CourseListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub semester: Option<String>,
    pub lecturer_id: Option<i64>,
    pub search: Option<String>,
}
