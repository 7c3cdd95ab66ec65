use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::QuizService;
use crate::models::quizzes::requests::CreateQuestionRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::assignments::check_course_ownership;

pub async fn add_question(
    service: &QuizService,
    request: &HttpRequest,
    quiz_id: i64,
    data: CreateQuestionRequest,
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

    if data.text.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Question text cannot be empty",
        )));
    }

    if data.options.len() < 2 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "A question needs at least two options",
        )));
    }

    // 正确答案必须指向一个存在的选项
    if data.correct_option < 0 || data.correct_option as usize >= data.options.len() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Correct option index is out of range",
        )));
    }

    if let Some(points) = data.points
        && points <= 0.0
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Question points must be greater than zero",
        )));
    }

    match storage.add_quiz_question(quiz_id, data).await {
        Ok(question) => {
            info!("Question {} added to quiz {}", question.id, quiz_id);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(question, "Question added successfully")))
        }
        Err(e) => {
            let msg = format!("Failed to add question: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
        }
    }
}

pub async fn delete_question(
    service: &QuizService,
    request: &HttpRequest,
    quiz_id: i64,
    question_id: i64,
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

    match storage.delete_quiz_question(quiz_id, question_id).await {
        Ok(true) => {
            info!("Question {} removed from quiz {}", question_id, quiz_id);
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty(
                "Question deleted successfully",
            )))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::QuestionNotFound,
            "Question not found",
        ))),
        Err(e) => {
            let msg = format!("Failed to delete question: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
        }
    }
}
