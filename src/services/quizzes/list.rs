use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuizService;
use crate::middlewares::RequireJWT;
use crate::models::quizzes::requests::{QuizListParams, QuizListQuery};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_quizzes(
    service: &QuizService,
    request: &HttpRequest,
    course_id: i64,
    params: QuizListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let published_only = RequireJWT::extract_user_role(request) == Some(UserRole::Student);

    let query = QuizListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        course_id: Some(course_id),
        published_only,
    };

    match storage.list_quizzes_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Quiz list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get quiz list: {e}"),
            )),
        ),
    }
}
