use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info, warn};

use super::EnrollmentService;
use crate::middlewares::RequireJWT;
use crate::models::activity::entities::NewActivityLog;
use crate::models::enrollments::entities::EnrollmentStatus;
use crate::models::{ApiResponse, ErrorCode};

pub async fn enroll(
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

    // 1. 课程存在性
    let course = match storage.get_course_by_id(course_id).await {
        Ok(Some(c)) => c,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "Course not found",
            )));
        }
        Err(e) => {
            error!("Failed to get course: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error",
                )),
            );
        }
    };

    // 2. 选课窗口必须开放
    match storage.get_open_registration_period(chrono::Utc::now()).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::RegistrationClosed,
                "Course registration is closed",
            )));
        }
        Err(e) => {
            error!("Failed to check registration period: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error",
                )),
            );
        }
    }

    // 3. 重复选课检查
    match storage.get_enrollment(course_id, student_id).await {
        Ok(Some(enrollment)) if enrollment.status == EnrollmentStatus::Enrolled => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::AlreadyEnrolled,
                "You are already enrolled in this course",
            )));
        }
        Ok(_) => {}
        Err(e) => {
            error!("Failed to check enrollment: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error",
                )),
            );
        }
    }

    // 4. 容量检查
    match storage.count_active_enrollments(course_id).await {
        Ok(count) if count >= course.max_students as u64 => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::CourseFull,
                "Course has reached its enrollment limit",
            )));
        }
        Ok(_) => {}
        Err(e) => {
            error!("Failed to count enrollments: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error",
                )),
            );
        }
    }

    match storage.create_enrollment(course_id, student_id).await {
        Ok(enrollment) => {
            info!("Student {} enrolled in course {}", student_id, course.code);
            if let Err(e) = storage
                .insert_activity_log(NewActivityLog {
                    user_id: student_id,
                    action: "enrollment.create".to_string(),
                    target: Some(format!("course:{course_id}")),
                    detail: Some(course.code.clone()),
                })
                .await
            {
                warn!("Failed to record activity log: {}", e);
            }
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(enrollment, "Enrolled successfully")))
        }
        Err(e) => {
            let msg = format!("Enrollment failed: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
        }
    }
}
