pub mod books;
pub mod borrow;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::library::requests::{
    BookListParams, BorrowingListParams, CreateBookRequest, UpdateBookRequest,
};
use crate::storage::Storage;

pub struct LibraryService {
    storage: Option<Arc<dyn Storage>>,
}

impl LibraryService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 新增馆藏（管理员）
    pub async fn create_book(
        &self,
        request: &HttpRequest,
        data: CreateBookRequest,
    ) -> ActixResult<HttpResponse> {
        books::create_book(self, request, data).await
    }

    // 图书详情
    pub async fn get_book(&self, request: &HttpRequest, book_id: i64) -> ActixResult<HttpResponse> {
        books::get_book(self, request, book_id).await
    }

    // 图书列表
    pub async fn list_books(
        &self,
        request: &HttpRequest,
        params: BookListParams,
    ) -> ActixResult<HttpResponse> {
        books::list_books(self, request, params).await
    }

    // 更新馆藏（管理员）
    pub async fn update_book(
        &self,
        request: &HttpRequest,
        book_id: i64,
        data: UpdateBookRequest,
    ) -> ActixResult<HttpResponse> {
        books::update_book(self, request, book_id, data).await
    }

    // 删除馆藏（管理员）
    pub async fn delete_book(
        &self,
        request: &HttpRequest,
        book_id: i64,
    ) -> ActixResult<HttpResponse> {
        books::delete_book(self, request, book_id).await
    }

    // 借书
    pub async fn borrow_book(
        &self,
        request: &HttpRequest,
        book_id: i64,
    ) -> ActixResult<HttpResponse> {
        borrow::borrow_book(self, request, book_id).await
    }

    // 还书（逾期计罚金）
    pub async fn return_book(
        &self,
        request: &HttpRequest,
        borrowing_id: i64,
    ) -> ActixResult<HttpResponse> {
        borrow::return_book(self, request, borrowing_id).await
    }

    // 当前用户的借阅记录
    pub async fn list_my_borrowings(
        &self,
        request: &HttpRequest,
        params: BorrowingListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_my_borrowings(self, request, params).await
    }

    // 全部借阅记录（管理员）
    pub async fn list_borrowings(
        &self,
        request: &HttpRequest,
        params: BorrowingListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_borrowings(self, request, params).await
    }
}
