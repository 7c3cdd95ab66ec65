use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ApplicationService;
use crate::models::applications::requests::{ApplicationListParams, ApplicationListQuery};
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_application(
    service: &ApplicationService,
    request: &HttpRequest,
    application_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_application_by_id(application_id).await {
        Ok(Some(application)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            application,
            "Application retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ApplicationNotFound,
            "Application not found",
        ))),
        Err(e) => {
            error!("Failed to get application: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get application: {e}"),
                )),
            )
        }
    }
}

pub async fn list_applications(
    service: &ApplicationService,
    request: &HttpRequest,
    params: ApplicationListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = ApplicationListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        status: params.status,
        program: params.program,
    };

    match storage.list_applications_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Application list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get application list: {e}"),
            )),
        ),
    }
}
