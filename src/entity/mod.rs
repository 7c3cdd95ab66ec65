//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。

pub mod prelude;

pub mod activity_logs;
pub mod announcements;
pub mod applications;
pub mod assignments;
pub mod books;
pub mod borrowings;
pub mod courses;
pub mod enrollments;
pub mod fees;
pub mod lecturer_profiles;
pub mod messages;
pub mod notifications;
pub mod payments;
pub mod quiz_answers;
pub mod quiz_attempts;
pub mod quiz_questions;
pub mod quizzes;
pub mod registration_periods;
pub mod service_requests;
pub mod student_profiles;
pub mod submissions;
pub mod system_settings;
pub mod users;
