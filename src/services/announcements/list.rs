use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AnnouncementService;
use crate::middlewares::RequireJWT;
use crate::models::announcements::requests::{AnnouncementListParams, AnnouncementListQuery};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_announcements(
    service: &AnnouncementService,
    request: &HttpRequest,
    params: AnnouncementListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 学生的可见范围：全局公告 + 已选课程的公告
    let course_ids = if RequireJWT::extract_user_role(request) == Some(UserRole::Student) {
        let student_id = match RequireJWT::extract_user_id(request) {
            Some(id) => id,
            None => {
                return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                    ErrorCode::Unauthorized,
                    "Unauthorized: missing user id",
                )));
            }
        };
        match storage.list_enrolled_course_ids(student_id).await {
            Ok(ids) => Some(ids),
            Err(e) => {
                error!("Failed to list enrolled courses: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Internal server error",
                    )),
                );
            }
        }
    } else {
        None
    };

    let query = AnnouncementListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        course_ids,
        course_id: params.course_id,
    };

    match storage.list_announcements_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Announcement list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get announcement list: {e}"),
            )),
        ),
    }
}
