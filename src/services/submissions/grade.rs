use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info, warn};

use super::SubmissionService;
use crate::middlewares::RequireJWT;
use crate::models::activity::entities::NewActivityLog;
use crate::models::notifications::entities::NewNotification;
use crate::models::submissions::requests::GradeSubmissionRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::assignments::check_course_ownership;

pub async fn grade_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: i64,
    data: GradeSubmissionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let graded_by = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };

    let submission = match storage.get_submission_by_id(submission_id).await {
        Ok(Some(s)) => s,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubmissionNotFound,
                "Submission not found",
            )));
        }
        Err(e) => {
            error!("Failed to get submission: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error",
                )),
            );
        }
    };

    let assignment = match storage.get_assignment_by_id(submission.assignment_id).await {
        Ok(Some(a)) => a,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                "Assignment not found",
            )));
        }
        Err(e) => {
            error!("Failed to get assignment: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error",
                )),
            );
        }
    };

    if let Err(response) = check_course_ownership(&storage, request, assignment.course_id).await {
        return Ok(response);
    }

    // 分数必须落在 [0, 满分] 区间
    if data.score < 0.0 || data.score > assignment.max_score {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ScoreOutOfRange,
            format!(
                "Score must be between 0 and {}",
                assignment.max_score
            ),
        )));
    }

    match storage
        .grade_submission(submission_id, data.score, data.feedback, graded_by)
        .await
    {
        Ok(Some(graded)) => {
            info!(
                "Submission {} graded with score {} by user {}",
                submission_id, data.score, graded_by
            );
            if let Err(e) = storage
                .insert_notifications(vec![NewNotification {
                    user_id: submission.student_id,
                    title: format!("Assignment graded: {}", assignment.title),
                    body: format!("Your submission received a score of {}", data.score),
                    kind: "grade".to_string(),
                }])
                .await
            {
                warn!("Failed to insert notification: {}", e);
            }
            if let Err(e) = storage
                .insert_activity_log(NewActivityLog {
                    user_id: graded_by,
                    action: "submission.grade".to_string(),
                    target: Some(format!("submission:{submission_id}")),
                    detail: Some(format!("score:{}", data.score)),
                })
                .await
            {
                warn!("Failed to record activity log: {}", e);
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                graded,
                "Submission graded successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubmissionNotFound,
            "Submission not found",
        ))),
        Err(e) => {
            let msg = format!("Failed to grade submission: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
        }
    }
}
