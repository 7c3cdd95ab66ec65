use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::Utc;
use tracing::{error, info};

use super::SystemService;
use crate::models::system::requests::CreateRegistrationPeriodRequest;
use crate::models::system::responses::RegistrationPeriodResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_registration_period(
    service: &SystemService,
    request: &HttpRequest,
    data: CreateRegistrationPeriodRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if data.ends_at <= data.starts_at {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "The window must end after it starts",
        )));
    }

    if data.session.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Session cannot be empty",
        )));
    }

    match storage.create_registration_period(data).await {
        Ok(period) => {
            info!(
                "Registration period {} created for session {}",
                period.id, period.session
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                period,
                "Registration period created successfully",
            )))
        }
        Err(e) => {
            let msg = format!("Failed to create registration period: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
        }
    }
}

pub async fn list_registration_periods(
    service: &SystemService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_registration_periods().await {
        Ok(periods) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            periods,
            "Registration periods retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get registration periods: {e}"),
            )),
        ),
    }
}

pub async fn set_period_active(
    service: &SystemService,
    request: &HttpRequest,
    period_id: i64,
    active: bool,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.set_registration_period_active(period_id, active).await {
        Ok(Some(period)) => {
            info!(
                "Registration period {} {}",
                period_id,
                if active { "activated" } else { "deactivated" }
            );
            let message = if active {
                "Registration period activated successfully"
            } else {
                "Registration period deactivated successfully"
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(period, message)))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::PeriodNotFound,
            "Registration period not found",
        ))),
        Err(e) => {
            let msg = format!("Failed to update registration period: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
        }
    }
}

pub async fn current_registration_period(
    service: &SystemService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let now = Utc::now();
    match storage.get_open_registration_period(now).await {
        Ok(Some(period)) => {
            let open = period.is_open(now);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                RegistrationPeriodResponse { period, open },
                "Current registration period retrieved successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::PeriodNotFound,
            "No open registration period",
        ))),
        Err(e) => {
            error!("Failed to get registration period: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get registration period: {e}"),
                )),
            )
        }
    }
}
