use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MessageService;
use crate::middlewares::RequireJWT;
use crate::models::messages::requests::{MessageListParams, MessageListQuery};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_inbox(
    service: &MessageService,
    request: &HttpRequest,
    params: MessageListParams,
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

    let query = MessageListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        recipient_id: Some(user_id),
        sender_id: None,
        unread_only: params.unread_only,
    };

    match storage.list_messages_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Inbox retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get inbox: {e}"),
            )),
        ),
    }
}

pub async fn list_outbox(
    service: &MessageService,
    request: &HttpRequest,
    params: MessageListParams,
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

    let query = MessageListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        recipient_id: None,
        sender_id: Some(user_id),
        unread_only: None,
    };

    match storage.list_messages_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Outbox retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get outbox: {e}"),
            )),
        ),
    }
}
