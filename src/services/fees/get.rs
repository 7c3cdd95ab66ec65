use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde::Serialize;
use tracing::error;

use super::FeeService;
use crate::middlewares::RequireJWT;
use crate::models::fees::entities::{Fee, Payment};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

#[derive(Debug, Serialize)]
struct FeeDetail {
    #[serde(flatten)]
    fee: Fee,
    balance: f64,
    payments: Vec<Payment>,
}

pub async fn get_fee(
    service: &FeeService,
    request: &HttpRequest,
    fee_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let fee = match storage.get_fee_by_id(fee_id).await {
        Ok(Some(f)) => f,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FeeNotFound,
                "Fee not found",
            )));
        }
        Err(e) => {
            error!("Failed to get fee: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error",
                )),
            );
        }
    };

    // 学生只能看自己的账单
    let uid = RequireJWT::extract_user_id(request);
    let role = RequireJWT::extract_user_role(request);
    if role == Some(UserRole::Student) && uid != Some(fee.student_id) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "You can only view your own fees",
        )));
    }

    match storage.list_payments(fee_id).await {
        Ok(payments) => {
            let balance = fee.balance();
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                FeeDetail {
                    fee,
                    balance,
                    payments,
                },
                "Fee retrieved successfully",
            )))
        }
        Err(e) => {
            error!("Failed to list payments: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get fee: {e}"),
                )),
            )
        }
    }
}
