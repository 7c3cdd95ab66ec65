use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::library::requests::{
    BookListParams, BorrowingListParams, CreateBookRequest, UpdateBookRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::LibraryService;
use crate::utils::{SafeBookIdI64, SafeBorrowingIdI64};

// 懒加载的全局 LibraryService 实例
static LIBRARY_SERVICE: Lazy<LibraryService> = Lazy::new(LibraryService::new_lazy);

// HTTP处理程序
pub async fn create_book(
    req: HttpRequest,
    book_data: web::Json<CreateBookRequest>,
) -> ActixResult<HttpResponse> {
    LIBRARY_SERVICE.create_book(&req, book_data.into_inner()).await
}

pub async fn get_book(req: HttpRequest, book_id: SafeBookIdI64) -> ActixResult<HttpResponse> {
    LIBRARY_SERVICE.get_book(&req, book_id.0).await
}

pub async fn list_books(
    req: HttpRequest,
    query: web::Query<BookListParams>,
) -> ActixResult<HttpResponse> {
    LIBRARY_SERVICE.list_books(&req, query.into_inner()).await
}

pub async fn update_book(
    req: HttpRequest,
    book_id: SafeBookIdI64,
    book_data: web::Json<UpdateBookRequest>,
) -> ActixResult<HttpResponse> {
    LIBRARY_SERVICE
        .update_book(&req, book_id.0, book_data.into_inner())
        .await
}

pub async fn delete_book(req: HttpRequest, book_id: SafeBookIdI64) -> ActixResult<HttpResponse> {
    LIBRARY_SERVICE.delete_book(&req, book_id.0).await
}

pub async fn borrow_book(req: HttpRequest, book_id: SafeBookIdI64) -> ActixResult<HttpResponse> {
    LIBRARY_SERVICE.borrow_book(&req, book_id.0).await
}

pub async fn return_book(
    req: HttpRequest,
    borrowing_id: SafeBorrowingIdI64,
) -> ActixResult<HttpResponse> {
    LIBRARY_SERVICE.return_book(&req, borrowing_id.0).await
}

pub async fn list_my_borrowings(
    req: HttpRequest,
    query: web::Query<BorrowingListParams>,
) -> ActixResult<HttpResponse> {
    LIBRARY_SERVICE
        .list_my_borrowings(&req, query.into_inner())
        .await
}

pub async fn list_borrowings(
    req: HttpRequest,
    query: web::Query<BorrowingListParams>,
) -> ActixResult<HttpResponse> {
    LIBRARY_SERVICE
        .list_borrowings(&req, query.into_inner())
        .await
}

// 配置路由
pub fn configure_library_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/library/books")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_books))
                    .route(
                        web::post()
                            .to(create_book)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/{book_id}")
                    .route(web::get().to(get_book))
                    .route(
                        web::put()
                            .to(update_book)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_book)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(web::resource("/{book_id}/borrow").route(web::post().to(borrow_book))),
    );

    // 借阅记录
    cfg.service(
        web::scope("/api/v1/library/borrowings")
            .wrap(middlewares::RequireJWT)
            .route("/my", web::get().to(list_my_borrowings))
            .service(
                web::resource("").route(
                    web::get()
                        .to(list_borrowings)
                        .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                ),
            )
            .route("/{borrowing_id}/return", web::post().to(return_book)),
    );
}
