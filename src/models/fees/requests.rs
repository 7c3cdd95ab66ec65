use super::entities::FeeStatus;
use crate::models::common::pagination::PaginationQuery;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// 创建费用账单请求
#[derive(Debug, Deserialize)]
pub struct CreateFeeRequest {
    pub student_id: i64,
    pub description: String,
    pub amount: f64,
    pub session: String,
    pub due_at: Option<DateTime<Utc>>,
}

/// 缴费请求
#[derive(Debug, Deserialize)]
pub struct CreatePaymentRequest {
    pub amount: f64,
    pub method: String,
}

/// 费用列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize)]
pub struct FeeListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub student_id: Option<i64>,
    pub session: Option<String>,
    pub status: Option<FeeStatus>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct FeeListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub student_id: Option<i64>,
    pub session: Option<String>,
    pub status: Option<FeeStatus>,
}
