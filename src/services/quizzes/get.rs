use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::QuizService;
use crate::middlewares::RequireJWT;
use crate::models::quizzes::responses::QuizDetailResponse;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_quiz(
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

    let is_student = RequireJWT::extract_user_role(request) == Some(UserRole::Student);

    if is_student && !quiz.published {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::QuizNotPublished,
            "Quiz is not published yet",
        )));
    }

    let questions = match storage.list_quiz_questions(quiz_id).await {
        Ok(questions) => questions,
        Err(e) => {
            error!("Failed to list quiz questions: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error",
                )),
            );
        }
    };

    // 学生视角剔除正确答案
    let questions = if is_student {
        questions
            .into_iter()
            .map(|q| q.without_answer())
            .collect()
    } else {
        questions
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        QuizDetailResponse { quiz, questions },
        "Quiz retrieved successfully",
    )))
}
