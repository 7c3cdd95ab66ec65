use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ActivityService;
use crate::models::activity::requests::{ActivityLogListParams, ActivityLogListQuery};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_activity_logs(
    service: &ActivityService,
    request: &HttpRequest,
    params: ActivityLogListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = ActivityLogListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        user_id: params.user_id,
        action: params.action,
    };

    match storage.list_activity_logs_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Activity log retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get activity log: {e}"),
            )),
        ),
    }
}
