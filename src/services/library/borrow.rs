use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::{Duration, Utc};
use tracing::{error, info, warn};

use super::LibraryService;
use crate::middlewares::RequireJWT;
use crate::models::activity::entities::NewActivityLog;
use crate::models::library::entities::overdue_fine;
use crate::models::library::responses::ReturnBookResponse;
use crate::models::notifications::entities::NewNotification;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::system::DynamicConfig;

pub async fn borrow_book(
    service: &LibraryService,
    request: &HttpRequest,
    book_id: i64,
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

    let book = match storage.get_book_by_id(book_id).await {
        Ok(Some(b)) => b,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::BookNotFound,
                "Book not found",
            )));
        }
        Err(e) => {
            error!("Failed to get book: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error",
                )),
            );
        }
    };

    if book.available_copies <= 0 {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::BookUnavailable,
            "No copies of this book are currently available",
        )));
    }

    // 同一本书不可重复借
    match storage.get_outstanding_borrowing(book_id, user_id).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::AlreadyBorrowed,
                "You already have an outstanding loan for this book",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            error!("Failed to check outstanding borrowing: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error",
                )),
            );
        }
    }

    let due_at = Utc::now() + Duration::days(DynamicConfig::library_loan_days().await);

    match storage.create_borrowing(book_id, user_id, due_at).await {
        Ok(borrowing) => {
            info!(
                "User {} borrowed book {} (due {})",
                user_id, book_id, borrowing.due_at
            );
            if let Err(e) = storage
                .insert_activity_log(NewActivityLog {
                    user_id,
                    action: "library.borrow".to_string(),
                    target: Some(format!("book:{book_id}")),
                    detail: Some(book.title.clone()),
                })
                .await
            {
                warn!("Failed to record activity log: {}", e);
            }
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(borrowing, "Book borrowed successfully")))
        }
        Err(e) => {
            let msg = format!("Failed to borrow book: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
        }
    }
}

pub async fn return_book(
    service: &LibraryService,
    request: &HttpRequest,
    borrowing_id: i64,
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

    let borrowing = match storage.get_borrowing_by_id(borrowing_id).await {
        Ok(Some(b)) => b,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::BorrowingNotFound,
                "Borrowing record not found",
            )));
        }
        Err(e) => {
            error!("Failed to get borrowing: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error",
                )),
            );
        }
    };

    // 借书人本人或管理员可还
    let role = RequireJWT::extract_user_role(request);
    if borrowing.user_id != user_id && role != Some(UserRole::Admin) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "You can only return your own loans",
        )));
    }

    if borrowing.returned_at.is_some() {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::AlreadyReturned,
            "This loan has already been returned",
        )));
    }

    let fine = overdue_fine(
        borrowing.due_at,
        Utc::now(),
        DynamicConfig::library_fine_per_day().await,
    );

    match storage.return_borrowing(borrowing_id, fine).await {
        Ok(returned) => {
            info!(
                "Borrowing {} returned by user {} (fine: {})",
                borrowing_id, user_id, fine
            );
            if fine > 0.0 {
                if let Err(e) = storage
                    .insert_notifications(vec![NewNotification {
                        user_id: returned.user_id,
                        title: "Overdue book returned".to_string(),
                        body: format!("A late-return fine of {fine:.2} has been applied"),
                        kind: "library".to_string(),
                    }])
                    .await
                {
                    warn!("Failed to insert notification: {}", e);
                }
            }
            if let Err(e) = storage
                .insert_activity_log(NewActivityLog {
                    user_id,
                    action: "library.return".to_string(),
                    target: Some(format!("borrowing:{borrowing_id}")),
                    detail: (fine > 0.0).then(|| format!("fine:{fine:.2}")),
                })
                .await
            {
                warn!("Failed to record activity log: {}", e);
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                ReturnBookResponse {
                    borrowing: returned,
                    fine,
                },
                "Book returned successfully",
            )))
        }
        Err(e) => {
            let msg = format!("Failed to return book: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
        }
    }
}
