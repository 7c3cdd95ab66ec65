use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::MessageService;
use crate::middlewares::RequireJWT;
use crate::models::messages::requests::SendMessageRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn send_message(
    service: &MessageService,
    request: &HttpRequest,
    data: SendMessageRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let sender_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };

    if data.subject.trim().is_empty() || data.body.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Message subject and body cannot be empty",
        )));
    }

    if data.recipient_id == sender_id {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Cannot send a message to yourself",
        )));
    }

    // 收件人必须存在
    match storage.get_user_by_id(data.recipient_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "Recipient not found",
            )));
        }
        Err(e) => {
            error!("Failed to get recipient: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error",
                )),
            );
        }
    }

    match storage.create_message(sender_id, data).await {
        Ok(message) => {
            info!(
                "Message {} sent from user {} to user {}",
                message.id, sender_id, message.recipient_id
            );
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(message, "Message sent successfully")))
        }
        Err(e) => {
            let msg = format!("Failed to send message: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
        }
    }
}
