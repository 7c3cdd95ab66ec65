use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ServiceRequestService;
use crate::middlewares::RequireJWT;
use crate::models::requests::requests::{ServiceRequestListParams, ServiceRequestListQuery};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_requests(
    service: &ServiceRequestService,
    request: &HttpRequest,
    params: ServiceRequestListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 学生只能查自己的申请
    let student_id = if RequireJWT::extract_user_role(request) == Some(UserRole::Student) {
        match RequireJWT::extract_user_id(request) {
            Some(id) => Some(id),
            None => {
                return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                    ErrorCode::Unauthorized,
                    "Unauthorized: missing user id",
                )));
            }
        }
    } else {
        None
    };

    let query = ServiceRequestListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        student_id,
        kind: params.kind,
        status: params.status,
    };

    match storage.list_service_requests_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Request list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get request list: {e}"),
            )),
        ),
    }
}
