use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::MessageService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_message(
    service: &MessageService,
    request: &HttpRequest,
    message_id: i64,
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

    let mut message = match storage.get_message_by_id(message_id).await {
        Ok(Some(m)) => m,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::MessageNotFound,
                "Message not found",
            )));
        }
        Err(e) => {
            error!("Failed to get message: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error",
                )),
            );
        }
    };

    // 只有收发双方可见
    if message.sender_id != user_id && message.recipient_id != user_id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "You are not a participant of this message",
        )));
    }

    // 收件人打开即标记已读
    if message.recipient_id == user_id && !message.read {
        match storage.mark_message_read(message_id, user_id).await {
            Ok(true) => message.read = true,
            Ok(false) => {}
            Err(e) => error!("Failed to mark message read: {}", e),
        }
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        message,
        "Message retrieved successfully",
    )))
}

pub async fn mark_read(
    service: &MessageService,
    request: &HttpRequest,
    message_id: i64,
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

    match storage.mark_message_read(message_id, user_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty(
            "Message marked as read",
        ))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::MessageNotFound,
            "Message not found",
        ))),
        Err(e) => {
            error!("Failed to mark message read: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to mark message read: {e}"),
                )),
            )
        }
    }
}
