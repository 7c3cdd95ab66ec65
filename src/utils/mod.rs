pub mod extractor;
pub mod jwt;
pub mod parameter_error_handler;
pub mod password;
pub mod random_code;
pub mod sql;
pub mod validate;

pub use extractor::{
    SafeApplicationIdI64, SafeAssignmentIdI64, SafeAttemptIdI64, SafeBookIdI64, SafeBorrowingIdI64,
    SafeCourseIdI64, SafeFeeIdI64, SafeIDI64, SafeMessageIdI64, SafeNotificationIdI64,
    SafePeriodIdI64, SafeQuizIdI64, SafeRequestIdI64, SafeSubmissionIdI64,
};
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
pub use sql::escape_like_pattern;
