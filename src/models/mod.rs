//! 数据模型定义
//!
//! 按业务域划分的请求/响应/业务实体，与 `entity` 中的数据库实体分离。

pub mod common;

pub mod activity;
pub mod announcements;
pub mod applications;
pub mod assignments;
pub mod auth;
pub mod courses;
pub mod enrollments;
pub mod fees;
pub mod library;
pub mod messages;
pub mod notifications;
pub mod quizzes;
pub mod requests;
pub mod submissions;
pub mod system;
pub mod users;

pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// 程序启动时间（用于运行时长统计）
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// API 业务错误码
///
/// 与 HTTP 状态码独立，分段分配：
/// - 0: 成功
/// - 1xxx: 通用错误
/// - 2xxx: 用户 / 档案
/// - 3xxx: 课程 / 选课
/// - 4xxx: 作业 / 提交 / 测验
/// - 5xxx: 财务
/// - 6xxx: 消息 / 通知 / 公告
/// - 7xxx: 图书馆
/// - 8xxx: 自助申请 / 入学申请
/// - 9xxx: 系统设置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1002,
    NotFound = 1003,
    InternalServerError = 1004,
    AuthFailed = 1005,
    TooManyRequests = 1006,

    UserNotFound = 2001,
    UserAlreadyExists = 2002,
    ProfileNotFound = 2003,

    CourseNotFound = 3001,
    CourseAlreadyExists = 3002,
    EnrollmentNotFound = 3003,
    AlreadyEnrolled = 3004,
    CourseFull = 3005,
    RegistrationClosed = 3006,
    NotEnrolled = 3007,

    AssignmentNotFound = 4001,
    SubmissionNotFound = 4002,
    DeadlinePassed = 4003,
    ScoreOutOfRange = 4004,
    QuizNotFound = 4101,
    QuestionNotFound = 4102,
    AttemptNotFound = 4103,
    AttemptLimitReached = 4104,
    QuizNotPublished = 4105,
    AttemptAlreadySubmitted = 4106,

    FeeNotFound = 5001,
    PaymentExceedsBalance = 5002,
    FeeAlreadySettled = 5003,

    MessageNotFound = 6001,
    NotificationNotFound = 6002,
    AnnouncementNotFound = 6003,

    BookNotFound = 7001,
    BookUnavailable = 7002,
    BorrowingNotFound = 7003,
    AlreadyBorrowed = 7004,
    AlreadyReturned = 7005,
    BookAlreadyExists = 7006,

    RequestNotFound = 8001,
    RequestAlreadyDecided = 8002,
    ApplicationNotFound = 8003,
    ApplicationAlreadyReviewed = 8004,

    SettingNotFound = 9001,
    PeriodNotFound = 9002,
}

impl serde::Serialize for ErrorCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i32(*self as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::Unauthorized as i32, 1001);
        assert_eq!(ErrorCode::AlreadyEnrolled as i32, 3004);
        assert_eq!(ErrorCode::PaymentExceedsBalance as i32, 5002);
        assert_eq!(ErrorCode::AlreadyReturned as i32, 7005);
    }
}
