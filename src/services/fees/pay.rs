use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info, warn};

use super::FeeService;
use crate::middlewares::RequireJWT;
use crate::models::activity::entities::NewActivityLog;
use crate::models::fees::requests::CreatePaymentRequest;
use crate::models::fees::responses::PaymentResponse;
use crate::models::notifications::entities::NewNotification;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::random_code::generate_random_code;

pub async fn pay_fee(
    service: &FeeService,
    request: &HttpRequest,
    fee_id: i64,
    data: CreatePaymentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let uid = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };

    if data.amount <= 0.0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Payment amount must be greater than zero",
        )));
    }

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

    // 学生只能缴自己的账单
    if RequireJWT::extract_user_role(request) == Some(UserRole::Student) && uid != fee.student_id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "You can only pay your own fees",
        )));
    }

    let balance = fee.balance();
    if balance <= 0.0 {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::FeeAlreadySettled,
            "This fee has already been settled",
        )));
    }
    if data.amount > balance + f64::EPSILON {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::PaymentExceedsBalance,
            format!("Payment exceeds the outstanding balance of {balance:.2}"),
        )));
    }

    let reference = format!("PAY-{}", generate_random_code(10));

    match storage
        .apply_payment(fee_id, data.amount, data.method, reference)
        .await
    {
        Ok((payment, updated_fee)) => {
            info!(
                "Payment of {} applied to fee {} (reference {})",
                payment.amount, fee_id, payment.reference
            );
            if let Err(e) = storage
                .insert_notifications(vec![NewNotification {
                    user_id: updated_fee.student_id,
                    title: format!("Payment received: {}", updated_fee.description),
                    body: format!(
                        "A payment of {:.2} was recorded. Outstanding balance: {:.2}",
                        payment.amount,
                        updated_fee.balance()
                    ),
                    kind: "payment".to_string(),
                }])
                .await
            {
                warn!("Failed to insert notification: {}", e);
            }
            if let Err(e) = storage
                .insert_activity_log(NewActivityLog {
                    user_id: uid,
                    action: "fee.pay".to_string(),
                    target: Some(format!("fee:{fee_id}")),
                    detail: Some(payment.reference.clone()),
                })
                .await
            {
                warn!("Failed to record activity log: {}", e);
            }
            Ok(HttpResponse::Created().json(ApiResponse::success(
                PaymentResponse {
                    payment,
                    fee: updated_fee,
                },
                "Payment recorded successfully",
            )))
        }
        Err(e) => {
            let msg = format!("Failed to record payment: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
        }
    }
}
