use super::entities::ApplicationStatus;
use crate::models::common::pagination::PaginationQuery;
use serde::Deserialize;

/// 提交入学申请（公开接口）
#[derive(Debug, Deserialize)]
pub struct CreateApplicationRequest {
    pub applicant_name: String,
    pub email: String,
    pub program: String,
    pub documents: Option<String>,
}

/// 审核入学申请
#[derive(Debug, Deserialize)]
pub struct ReviewApplicationRequest {
    // true 录取，false 拒绝
    pub admit: bool,
}

/// 入学申请列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub status: Option<ApplicationStatus>,
    pub program: Option<String>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct ApplicationListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub status: Option<ApplicationStatus>,
    pub program: Option<String>,
}
