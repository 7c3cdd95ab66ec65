use crate::models::common::pagination::PaginationQuery;
use serde::Deserialize;

/// 新增馆藏请求
#[derive(Debug, Deserialize)]
pub struct CreateBookRequest {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub total_copies: i32,
}

/// 更新馆藏请求
#[derive(Debug, Deserialize)]
pub struct UpdateBookRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub total_copies: Option<i32>,
}

/// 图书列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize)]
pub struct BookListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct BookListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
}

/// 借阅列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize)]
pub struct BorrowingListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub outstanding_only: Option<bool>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct BorrowingListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub user_id: Option<i64>,
    pub book_id: Option<i64>,
    pub outstanding_only: Option<bool>,
}
