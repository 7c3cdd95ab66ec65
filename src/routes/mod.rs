pub mod auth;

pub mod users;

pub mod courses;

pub mod enrollments;

pub mod assignments;

pub mod submissions;

pub mod quizzes;

pub mod fees;

pub mod announcements;

pub mod notifications;

pub mod messages;

pub mod library;

pub mod requests;

pub mod applications;

pub mod activity;

pub mod system;

pub use activity::configure_activity_routes;
pub use announcements::configure_announcement_routes;
pub use applications::configure_admission_routes;
pub use assignments::configure_assignment_routes;
pub use auth::configure_auth_routes;
pub use courses::configure_course_routes;
pub use enrollments::configure_enrollment_routes;
pub use fees::configure_fee_routes;
pub use library::configure_library_routes;
pub use messages::configure_message_routes;
pub use notifications::configure_notification_routes;
pub use quizzes::configure_quiz_routes;
pub use requests::configure_request_routes;
pub use submissions::configure_submission_routes;
pub use system::configure_system_routes;
pub use users::configure_user_routes;
