use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AnnouncementService;
use crate::middlewares::RequireJWT;
use crate::models::announcements::requests::CreateAnnouncementRequest;
use crate::models::announcements::responses::AnnouncementCreatedResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::assignments::check_course_ownership;

pub async fn create_announcement(
    service: &AnnouncementService,
    request: &HttpRequest,
    data: CreateAnnouncementRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let author_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };

    if data.title.trim().is_empty() || data.body.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Announcement title and body cannot be empty",
        )));
    }

    // 课程公告通知选课学生，全局公告通知所有活跃用户
    let recipients = match data.course_id {
        Some(course_id) => {
            if let Err(response) = check_course_ownership(&storage, request, course_id).await {
                return Ok(response);
            }
            match storage.list_enrolled_student_ids(course_id).await {
                Ok(ids) => ids,
                Err(e) => {
                    error!("Failed to list enrolled students: {}", e);
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            "Internal server error",
                        ),
                    ));
                }
            }
        }
        None => match storage.list_active_user_ids().await {
            Ok(ids) => ids,
            Err(e) => {
                error!("Failed to list active users: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Internal server error",
                    )),
                );
            }
        },
    };

    match storage
        .create_announcement(author_id, data.course_id, data.title, data.body, recipients)
        .await
    {
        Ok((announcement, notified)) => {
            info!(
                "Announcement {} published, {} users notified",
                announcement.id, notified
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                AnnouncementCreatedResponse {
                    announcement,
                    notified,
                },
                "Announcement published successfully",
            )))
        }
        Err(e) => {
            let msg = format!("Failed to publish announcement: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
        }
    }
}
