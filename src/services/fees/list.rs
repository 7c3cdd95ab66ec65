use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeeService;
use crate::middlewares::RequireJWT;
use crate::models::fees::requests::{FeeListParams, FeeListQuery};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_fees(
    service: &FeeService,
    request: &HttpRequest,
    params: FeeListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let uid = RequireJWT::extract_user_id(request);
    let role = RequireJWT::extract_user_role(request);

    // 学生只能查自己的账单，忽略传入的 student_id
    let student_id = if role == Some(UserRole::Student) {
        match uid {
            Some(id) => Some(id),
            None => {
                return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                    ErrorCode::Unauthorized,
                    "Unauthorized: missing user id",
                )));
            }
        }
    } else {
        params.student_id
    };

    let query = FeeListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        student_id,
        session: params.session,
        status: params.status,
    };

    match storage.list_fees_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Fee list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get fee list: {e}"),
            )),
        ),
    }
}
