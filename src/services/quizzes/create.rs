use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::QuizService;
use crate::middlewares::RequireJWT;
use crate::models::quizzes::requests::CreateQuizRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::assignments::check_course_ownership;

pub async fn create_quiz(
    service: &QuizService,
    request: &HttpRequest,
    data: CreateQuizRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let created_by = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };

    if data.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Quiz title cannot be empty",
        )));
    }

    if let Some(max_attempts) = data.max_attempts
        && max_attempts < 1
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Max attempts must be at least 1",
        )));
    }

    if let Err(response) = check_course_ownership(&storage, request, data.course_id).await {
        return Ok(response);
    }

    match storage.create_quiz(created_by, data).await {
        Ok(quiz) => {
            info!("Quiz '{}' created for course {}", quiz.title, quiz.course_id);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(quiz, "Quiz created successfully")))
        }
        Err(e) => {
            let msg = format!("Failed to create quiz: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
        }
    }
}
