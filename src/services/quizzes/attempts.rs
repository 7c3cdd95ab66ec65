use std::collections::HashSet;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::scoring::{max_score, score_attempt};
use super::QuizService;
use crate::middlewares::RequireJWT;
use crate::models::enrollments::entities::EnrollmentStatus;
use crate::models::quizzes::requests::SubmitAttemptRequest;
use crate::models::quizzes::responses::{AttemptDetailResponse, AttemptResultResponse};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::assignments::check_course_ownership;

pub async fn start_attempt(
    service: &QuizService,
    request: &HttpRequest,
    quiz_id: i64,
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

    if !quiz.published {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::QuizNotPublished,
            "Quiz is not published yet",
        )));
    }

    // 必须已选该课程
    match storage.get_enrollment(quiz.course_id, student_id).await {
        Ok(Some(enrollment)) if enrollment.status == EnrollmentStatus::Enrolled => {}
        Ok(_) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::NotEnrolled,
                "You are not enrolled in this course",
            )));
        }
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

    // 尝试次数上限
    match storage.count_quiz_attempts(quiz_id, student_id).await {
        Ok(count) if count >= quiz.max_attempts as u64 => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::AttemptLimitReached,
                "You have reached the attempt limit for this quiz",
            )));
        }
        Ok(_) => {}
        Err(e) => {
            error!("Failed to count attempts: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error",
                )),
            );
        }
    }

    match storage.create_quiz_attempt(quiz_id, student_id).await {
        Ok(attempt) => {
            info!(
                "Student {} started attempt {} on quiz {}",
                student_id, attempt.attempt_number, quiz_id
            );
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(attempt, "Attempt started successfully")))
        }
        Err(e) => {
            let msg = format!("Failed to start attempt: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
        }
    }
}

pub async fn submit_attempt(
    service: &QuizService,
    request: &HttpRequest,
    attempt_id: i64,
    data: SubmitAttemptRequest,
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

    let attempt = match storage.get_quiz_attempt_by_id(attempt_id).await {
        Ok(Some(a)) => a,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AttemptNotFound,
                "Attempt not found",
            )));
        }
        Err(e) => {
            error!("Failed to get attempt: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error",
                )),
            );
        }
    };

    if attempt.student_id != student_id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "You can only submit your own attempt",
        )));
    }

    if attempt.submitted_at.is_some() {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::AttemptAlreadySubmitted,
            "This attempt has already been submitted",
        )));
    }

    let questions = match storage.list_quiz_questions(attempt.quiz_id).await {
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

    // 作答必须指向本测验的题目，且每题只能作答一次
    let mut answered = HashSet::new();
    for answer in &data.answers {
        if !questions.iter().any(|q| q.id == answer.question_id) {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::QuestionNotFound,
                format!("Question {} does not belong to this quiz", answer.question_id),
            )));
        }
        if !answered.insert(answer.question_id) {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                format!("Duplicate answer for question {}", answer.question_id),
            )));
        }
    }

    let answers: Vec<(i64, i32)> = data
        .answers
        .iter()
        .map(|a| (a.question_id, a.selected_option))
        .collect();
    let score = score_attempt(&questions, &answers);

    match storage.submit_quiz_attempt(attempt_id, answers, score).await {
        Ok(submitted) => {
            info!(
                "Attempt {} submitted by student {} with score {}",
                attempt_id, student_id, score
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                AttemptResultResponse {
                    attempt_id: submitted.id,
                    score,
                    max_score: max_score(&questions),
                },
                "Attempt submitted successfully",
            )))
        }
        Err(e) => {
            let msg = format!("Failed to submit attempt: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
        }
    }
}

pub async fn get_attempt(
    service: &QuizService,
    request: &HttpRequest,
    attempt_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let attempt = match storage.get_quiz_attempt_by_id(attempt_id).await {
        Ok(Some(a)) => a,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AttemptNotFound,
                "Attempt not found",
            )));
        }
        Err(e) => {
            error!("Failed to get attempt: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error",
                )),
            );
        }
    };

    // 学生只能看自己的作答，讲师只能看自己课程的作答
    let uid = RequireJWT::extract_user_id(request);
    let role = RequireJWT::extract_user_role(request);
    if role == Some(UserRole::Student) {
        if uid != Some(attempt.student_id) {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "You can only view your own attempt",
            )));
        }
    } else {
        let quiz = match storage.get_quiz_by_id(attempt.quiz_id).await {
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
    }

    match storage.list_quiz_attempt_answers(attempt_id).await {
        Ok(answers) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AttemptDetailResponse { attempt, answers },
            "Attempt retrieved successfully",
        ))),
        Err(e) => {
            error!("Failed to list attempt answers: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get attempt: {e}"),
                )),
            )
        }
    }
}

pub async fn list_attempts(
    service: &QuizService,
    request: &HttpRequest,
    quiz_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let uid = RequireJWT::extract_user_id(request);
    let role = RequireJWT::extract_user_role(request);

    // 学生只看自己的记录，讲师看自己课程的全部记录
    let student_filter = if role == Some(UserRole::Student) {
        match uid {
            Some(id) => Some(id),
            None => {
                return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                    ErrorCode::Unauthorized,
                    "Unauthorized: missing user id",
                )));
            }
        }
    } else {
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
        None
    };

    match storage.list_quiz_attempts(quiz_id, student_filter).await {
        Ok(attempts) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            attempts,
            "Attempt list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get attempt list: {e}"),
            )),
        ),
    }
}
