use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info, warn};

use super::ApplicationService;
use crate::middlewares::RequireJWT;
use crate::models::activity::entities::NewActivityLog;
use crate::models::applications::entities::ApplicationStatus;
use crate::models::applications::requests::ReviewApplicationRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn review_application(
    service: &ApplicationService,
    request: &HttpRequest,
    application_id: i64,
    data: ReviewApplicationRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let reviewed_by = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };

    // 仅 pending 可审核
    match storage.get_application_by_id(application_id).await {
        Ok(Some(application)) if application.status != ApplicationStatus::Pending => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::ApplicationAlreadyReviewed,
                "This application has already been reviewed",
            )));
        }
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ApplicationNotFound,
                "Application not found",
            )));
        }
        Err(e) => {
            error!("Failed to get application: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error",
                )),
            );
        }
    }

    match storage
        .review_application(application_id, data.admit, reviewed_by)
        .await
    {
        Ok(Some(reviewed)) => {
            let outcome = if data.admit { "admitted" } else { "rejected" };
            info!(
                "Application {} {} by user {}",
                application_id, outcome, reviewed_by
            );
            if let Err(e) = storage
                .insert_activity_log(NewActivityLog {
                    user_id: reviewed_by,
                    action: "application.review".to_string(),
                    target: Some(format!("application:{application_id}")),
                    detail: Some(outcome.to_string()),
                })
                .await
            {
                warn!("Failed to record activity log: {}", e);
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                reviewed,
                "Application reviewed successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ApplicationNotFound,
            "Application not found",
        ))),
        Err(e) => {
            let msg = format!("Failed to review application: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
        }
    }
}
