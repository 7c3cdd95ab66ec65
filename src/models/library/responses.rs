use super::entities::{Book, Borrowing};
use crate::models::common::pagination::PaginationInfo;
use serde::Serialize;

// 图书列表响应
#[derive(Debug, Serialize)]
pub struct BookListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<Book>,
}

// 借阅列表响应
#[derive(Debug, Serialize)]
pub struct BorrowingListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<Borrowing>,
}

// 归还结果
#[derive(Debug, Serialize)]
pub struct ReturnBookResponse {
    pub borrowing: Borrowing,
    pub fine: f64,
}
