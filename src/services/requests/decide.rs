use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info, warn};

use super::ServiceRequestService;
use crate::middlewares::RequireJWT;
use crate::models::activity::entities::NewActivityLog;
use crate::models::notifications::entities::NewNotification;
use crate::models::requests::entities::RequestStatus;
use crate::models::requests::requests::DecideRequestRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn decide_request(
    service: &ServiceRequestService,
    request: &HttpRequest,
    request_id: i64,
    data: DecideRequestRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let decided_by = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };

    // 仅 pending 可审批
    match storage.get_service_request_by_id(request_id).await {
        Ok(Some(found)) if found.status != RequestStatus::Pending => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::RequestAlreadyDecided,
                "This request has already been decided",
            )));
        }
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::RequestNotFound,
                "Request not found",
            )));
        }
        Err(e) => {
            error!("Failed to get request: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error",
                )),
            );
        }
    }

    match storage
        .decide_service_request(request_id, data.approve, decided_by, data.remark)
        .await
    {
        Ok(Some(decided)) => {
            info!(
                "Request {} {} by user {}",
                request_id,
                if data.approve { "approved" } else { "rejected" },
                decided_by
            );
            let outcome = if data.approve { "approved" } else { "rejected" };
            if let Err(e) = storage
                .insert_notifications(vec![NewNotification {
                    user_id: decided.student_id,
                    title: format!("Request {outcome}"),
                    body: format!("Your {} request has been {outcome}", decided.kind),
                    kind: "request".to_string(),
                }])
                .await
            {
                warn!("Failed to insert notification: {}", e);
            }
            if let Err(e) = storage
                .insert_activity_log(NewActivityLog {
                    user_id: decided_by,
                    action: "request.decide".to_string(),
                    target: Some(format!("request:{request_id}")),
                    detail: Some(outcome.to_string()),
                })
                .await
            {
                warn!("Failed to record activity log: {}", e);
            }
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success(decided, "Request decided successfully")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::RequestNotFound,
            "Request not found",
        ))),
        Err(e) => {
            let msg = format!("Failed to decide request: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
        }
    }
}
