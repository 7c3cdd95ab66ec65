//! 路径参数安全提取器
//!
//! 直接用 `web::Path<i64>` 时解析失败会返回 actix 默认的纯文本 404/400，
//! 这里统一转换成标准的 JSON 错误响应。

use actix_web::dev::Payload;
use actix_web::{Error, FromRequest, HttpRequest, HttpResponse};
use std::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

fn bad_request(message: &str, req_err: &str) -> Error {
    let response = HttpResponse::BadRequest()
        .json(ApiResponse::<()>::error_empty(ErrorCode::BadRequest, message));
    actix_web::error::InternalError::from_response(req_err.to_string(), response).into()
}

macro_rules! safe_i64_extractor {
    ($name:ident, $param:literal, $message:literal) => {
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                let result = match req.match_info().get($param) {
                    Some(raw) => match raw.parse::<i64>() {
                        Ok(id) if id > 0 => Ok($name(id)),
                        _ => Err(bad_request($message, raw)),
                    },
                    None => Err(bad_request($message, $param)),
                };
                ready(result)
            }
        }
    };
}

safe_i64_extractor!(SafeIDI64, "id", "无效的 ID");
safe_i64_extractor!(SafeCourseIdI64, "course_id", "无效的课程 ID");
safe_i64_extractor!(SafeAssignmentIdI64, "assignment_id", "无效的作业 ID");
safe_i64_extractor!(SafeSubmissionIdI64, "submission_id", "无效的提交 ID");
safe_i64_extractor!(SafeQuizIdI64, "quiz_id", "无效的测验 ID");
safe_i64_extractor!(SafeAttemptIdI64, "attempt_id", "无效的答题 ID");
safe_i64_extractor!(SafeFeeIdI64, "fee_id", "无效的账单 ID");
safe_i64_extractor!(SafeBookIdI64, "book_id", "无效的图书 ID");
safe_i64_extractor!(SafeBorrowingIdI64, "borrowing_id", "无效的借阅 ID");
safe_i64_extractor!(SafeMessageIdI64, "message_id", "无效的站内信 ID");
safe_i64_extractor!(SafeNotificationIdI64, "notification_id", "无效的通知 ID");
safe_i64_extractor!(SafeRequestIdI64, "request_id", "无效的申请 ID");
safe_i64_extractor!(SafeApplicationIdI64, "application_id", "无效的入学申请 ID");
safe_i64_extractor!(SafePeriodIdI64, "period_id", "无效的时间窗 ID");
