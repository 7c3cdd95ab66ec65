use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::QuizService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::assignments::check_course_ownership;

pub async fn set_published(
    service: &QuizService,
    request: &HttpRequest,
    quiz_id: i64,
    published: bool,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let quiz = match storage.get_quiz_by_id(quiz_id).await {
        Ok(Some(q)) => q,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::QuizNotFound,
                "Quiz not found",
            )));
        }
        Err(e) => {
            error!("Failed to get quiz: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error",
                )),
            );
        }
    };

    if let Err(response) = check_course_ownership(&storage, request, quiz.course_id).await {
        return Ok(response);
    }

    // 发布前至少要有一道题
    if published {
        match storage.list_quiz_questions(quiz_id).await {
            Ok(questions) if questions.is_empty() => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    "Cannot publish a quiz with no questions",
                )));
            }
            Ok(_) => {}
            Err(e) => {
                error!("Failed to list quiz questions: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Internal server error",
                    )),
                );
            }
        }
    }

    match storage.set_quiz_published(quiz_id, published).await {
        Ok(Some(updated)) => {
            info!("Quiz {} published state set to {}", quiz_id, published);
            let message = if published {
                "Quiz published successfully"
            } else {
                "Quiz unpublished successfully"
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(updated, message)))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::QuizNotFound,
            "Quiz not found",
        ))),
        Err(e) => {
            let msg = format!("Failed to update quiz: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
        }
    }
}

pub async fn delete_quiz(
    service: &QuizService,
    request: &HttpRequest,
    quiz_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let quiz = match storage.get_quiz_by_id(quiz_id).await {
        Ok(Some(q)) => q,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::QuizNotFound,
                "Quiz not found",
            )));
        }
        Err(e) => {
            error!("Failed to get quiz: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error",
                )),
            );
        }
    };

    if let Err(response) = check_course_ownership(&storage, request, quiz.course_id).await {
        return Ok(response);
    }

    match storage.delete_quiz(quiz_id).await {
        Ok(true) => {
            info!("Quiz {} deleted", quiz_id);
            Ok(HttpResponse::Ok()
                .json(ApiResponse::<()>::success_empty("Quiz deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::QuizNotFound,
            "Quiz not found",
        ))),
        Err(e) => {
            let msg = format!("Failed to delete quiz: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
        }
    }
}
