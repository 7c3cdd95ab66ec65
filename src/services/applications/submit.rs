use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ApplicationService;
use crate::models::applications::requests::CreateApplicationRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_email;

pub async fn submit_application(
    service: &ApplicationService,
    request: &HttpRequest,
    data: CreateApplicationRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if data.applicant_name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Applicant name cannot be empty",
        )));
    }

    if let Err(msg) = validate_email(&data.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    if data.program.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Program cannot be empty",
        )));
    }

    match storage.create_application(data).await {
        Ok(application) => {
            info!(
                "Admission application {} received for program '{}'",
                application.id, application.program
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                application,
                "Application submitted successfully",
            )))
        }
        Err(e) => {
            let msg = format!("Failed to submit application: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
        }
    }
}
