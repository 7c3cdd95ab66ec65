use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ServiceRequestService;
use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_request(
    service: &ServiceRequestService,
    request: &HttpRequest,
    request_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_service_request_by_id(request_id).await {
        Ok(Some(found)) => {
            // 学生只能看自己的申请
            let uid = RequireJWT::extract_user_id(request);
            let role = RequireJWT::extract_user_role(request);
            if role == Some(UserRole::Student) && uid != Some(found.student_id) {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::Forbidden,
                    "You can only view your own requests",
                )));
            }
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success(found, "Request retrieved successfully")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::RequestNotFound,
            "Request not found",
        ))),
        Err(e) => {
            error!("Failed to get request: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get request: {e}"),
                )),
            )
        }
    }
}
