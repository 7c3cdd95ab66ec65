use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::FeeService;
use crate::models::fees::requests::CreateFeeRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_fee(
    service: &FeeService,
    request: &HttpRequest,
    data: CreateFeeRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if data.amount <= 0.0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Fee amount must be greater than zero",
        )));
    }

    if data.description.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Fee description cannot be empty",
        )));
    }

    // 账单必须指向一名学生
    match storage.get_user_by_id(data.student_id).await {
        Ok(Some(user)) if user.role == UserRole::Student => {}
        Ok(Some(_)) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                "Fees can only be billed to students",
            )));
        }
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "Student not found",
            )));
        }
        Err(e) => {
            error!("Failed to get user: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error",
                )),
            );
        }
    }

    match storage.create_fee(data).await {
        Ok(fee) => {
            info!("Fee {} created for student {}", fee.id, fee.student_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(fee, "Fee created successfully")))
        }
        Err(e) => {
            let msg = format!("Failed to create fee: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
        }
    }
}
