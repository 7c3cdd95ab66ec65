use crate::models::common::pagination::PaginationQuery;
use serde::Deserialize;

/// 发布公告请求
#[derive(Debug, Deserialize)]
pub struct CreateAnnouncementRequest {
    pub course_id: Option<i64>,
    pub title: String,
    pub body: String,
}

/// 公告列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize)]
pub struct AnnouncementListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub course_id: Option<i64>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct AnnouncementListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    // 限定可见范围：全局公告 + 这些课程的公告
    pub course_ids: Option<Vec<i64>>,
    pub course_id: Option<i64>,
}
