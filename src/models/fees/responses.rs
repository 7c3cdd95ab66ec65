use super::entities::{Fee, Payment};
use crate::models::common::pagination::PaginationInfo;
use serde::Serialize;

// 费用列表响应
#[derive(Debug, Serialize)]
pub struct FeeListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<Fee>,
}

// 缴费结果
#[derive(Debug, Serialize)]
pub struct PaymentResponse {
    pub payment: Payment,
    pub fee: Fee,
}
