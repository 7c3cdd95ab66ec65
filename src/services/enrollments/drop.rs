use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info, warn};

use super::EnrollmentService;
use crate::middlewares::RequireJWT;
use crate::models::activity::entities::NewActivityLog;
use crate::models::{ApiResponse, ErrorCode};

pub async fn drop_enrollment(
    service: &EnrollmentService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let student_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };

    match storage.drop_enrollment(course_id, student_id).await {
        Ok(true) => {
            info!("Student {} dropped course {}", student_id, course_id);
            if let Err(e) = storage
                .insert_activity_log(NewActivityLog {
                    user_id: student_id,
                    action: "enrollment.drop".to_string(),
                    target: Some(format!("course:{course_id}")),
                    detail: None,
                })
                .await
            {
                warn!("Failed to record activity log: {}", e);
            }
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty(
                "Course dropped successfully",
            )))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotEnrolled,
            "You are not enrolled in this course",
        ))),
        Err(e) => {
            error!("Failed to drop enrollment: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to drop course: {e}"),
                )),
            )
        }
    }
}
