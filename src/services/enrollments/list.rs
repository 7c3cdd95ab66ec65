use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EnrollmentService;
use crate::middlewares::RequireJWT;
use crate::models::enrollments::requests::{EnrollmentListParams, EnrollmentListQuery};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_my_enrollments(
    service: &EnrollmentService,
    request: &HttpRequest,
    params: EnrollmentListParams,
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

    let query = EnrollmentListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        course_id: None,
        student_id: Some(student_id),
    };

    match storage.list_enrollments_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Enrollment list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get enrollment list: {e}"),
            )),
        ),
    }
}

pub async fn list_course_enrollments(
    service: &EnrollmentService,
    request: &HttpRequest,
    course_id: i64,
    params: EnrollmentListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let uid = RequireJWT::extract_user_id(request);
    let role = RequireJWT::extract_user_role(request);

    // 讲师只能看自己授课课程的名单
    if role == Some(UserRole::Lecturer) {
        match storage.get_course_by_id(course_id).await {
            Ok(Some(course)) => {
                if uid != Some(course.lecturer_id) {
                    return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                        ErrorCode::Forbidden,
                        "You can only view rosters for your own courses",
                    )));
                }
            }
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
        }
    }

    let query = EnrollmentListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        course_id: Some(course_id),
        student_id: None,
    };

    match storage.list_enrollments_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Course roster retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get course roster: {e}"),
            )),
        ),
    }
}
