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

pub use activity::ActivityService;
pub use announcements::AnnouncementService;
pub use applications::ApplicationService;
pub use assignments::AssignmentService;
pub use auth::AuthService;
pub use courses::CourseService;
pub use enrollments::EnrollmentService;
pub use fees::FeeService;
pub use library::LibraryService;
pub use messages::MessageService;
pub use notifications::NotificationService;
pub use quizzes::QuizService;
pub use requests::ServiceRequestService;
pub use submissions::SubmissionService;
pub use system::SystemService;
pub use users::UserService;
