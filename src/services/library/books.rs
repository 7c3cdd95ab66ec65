use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::LibraryService;
use crate::models::library::requests::{BookListParams, BookListQuery, CreateBookRequest, UpdateBookRequest};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_isbn;

pub async fn create_book(
    service: &LibraryService,
    request: &HttpRequest,
    data: CreateBookRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(msg) = validate_isbn(&data.isbn) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    if data.title.trim().is_empty() || data.author.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Book title and author cannot be empty",
        )));
    }

    if data.total_copies < 1 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Total copies must be at least 1",
        )));
    }

    // ISBN 唯一
    match storage.get_book_by_isbn(&data.isbn).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::BookAlreadyExists,
                "A book with this ISBN already exists",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            error!("Failed to check ISBN: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error",
                )),
            );
        }
    }

    match storage.create_book(data).await {
        Ok(book) => {
            info!("Book '{}' added to catalogue", book.title);
            Ok(HttpResponse::Created().json(ApiResponse::success(book, "Book added successfully")))
        }
        Err(e) => {
            let msg = format!("Failed to add book: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
        }
    }
}

pub async fn get_book(
    service: &LibraryService,
    request: &HttpRequest,
    book_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_book_by_id(book_id).await {
        Ok(Some(book)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(book, "Book retrieved successfully"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::BookNotFound,
            "Book not found",
        ))),
        Err(e) => {
            error!("Failed to get book: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get book: {e}"),
                )),
            )
        }
    }
}

pub async fn list_books(
    service: &LibraryService,
    request: &HttpRequest,
    params: BookListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = BookListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        search: params.search,
    };

    match storage.list_books_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Book list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get book list: {e}"),
            )),
        ),
    }
}

pub async fn update_book(
    service: &LibraryService,
    request: &HttpRequest,
    book_id: i64,
    data: UpdateBookRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(total_copies) = data.total_copies
        && total_copies < 0
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Total copies cannot be negative",
        )));
    }

    match storage.update_book(book_id, data).await {
        Ok(Some(book)) => {
            info!("Book {} updated", book_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(book, "Book updated successfully")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::BookNotFound,
            "Book not found",
        ))),
        Err(e) => {
            let msg = format!("Failed to update book: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
        }
    }
}

pub async fn delete_book(
    service: &LibraryService,
    request: &HttpRequest,
    book_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_book(book_id).await {
        Ok(true) => {
            info!("Book {} removed from catalogue", book_id);
            Ok(HttpResponse::Ok()
                .json(ApiResponse::<()>::success_empty("Book deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::BookNotFound,
            "Book not found",
        ))),
        Err(e) => {
            let msg = format!("Failed to delete book: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
        }
    }
}
