use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info, warn};

use super::ServiceRequestService;
use crate::middlewares::RequireJWT;
use crate::models::activity::entities::NewActivityLog;
use crate::models::requests::requests::CreateServiceRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_request(
    service: &ServiceRequestService,
    request: &HttpRequest,
    data: CreateServiceRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let student_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };

    let kind = data.kind.clone();

    match storage.create_service_request(student_id, data).await {
        Ok(created) => {
            info!("Student {} filed a {} request", student_id, kind);
            if let Err(e) = storage
                .insert_activity_log(NewActivityLog {
                    user_id: student_id,
                    action: "request.create".to_string(),
                    target: Some(format!("request:{}", created.id)),
                    detail: Some(kind.to_string()),
                })
                .await
            {
                warn!("Failed to record activity log: {}", e);
            }
            Ok(HttpResponse::Created().json(ApiResponse::success(
                created,
                "Request submitted successfully",
            )))
        }
        Err(e) => {
            let msg = format!("Failed to submit request: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
        }
    }
}
