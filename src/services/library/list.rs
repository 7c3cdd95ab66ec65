use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LibraryService;
use crate::middlewares::RequireJWT;
use crate::models::library::requests::{BorrowingListParams, BorrowingListQuery};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_my_borrowings(
    service: &LibraryService,
    request: &HttpRequest,
    params: BorrowingListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };

    let query = BorrowingListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        user_id: Some(user_id),
        book_id: None,
        outstanding_only: params.outstanding_only,
    };

    match storage.list_borrowings_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Borrowing list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get borrowing list: {e}"),
            )),
        ),
    }
}

pub async fn list_borrowings(
    service: &LibraryService,
    request: &HttpRequest,
    params: BorrowingListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = BorrowingListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        user_id: None,
        book_id: None,
        outstanding_only: params.outstanding_only,
    };

    match storage.list_borrowings_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Borrowing list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get borrowing list: {e}"),
            )),
        ),
    }
}
