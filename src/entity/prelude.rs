pub use super::activity_logs::Entity as ActivityLogs;
pub use super::announcements::Entity as Announcements;
pub use super::applications::Entity as Applications;
pub use super::assignments::Entity as Assignments;
pub use super::books::Entity as Books;
pub use super::borrowings::Entity as Borrowings;
pub use super::courses::Entity as Courses;
pub use super::enrollments::Entity as Enrollments;
pub use super::fees::Entity as Fees;
pub use super::lecturer_profiles::Entity as LecturerProfiles;
pub use super::messages::Entity as Messages;
pub use super::notifications::Entity as Notifications;
pub use super::payments::Entity as Payments;
pub use super::quiz_answers::Entity as QuizAnswers;
pub use super::quiz_attempts::Entity as QuizAttempts;
pub use super::quiz_questions::Entity as QuizQuestions;
pub use super::quizzes::Entity as Quizzes;
pub use super::registration_periods::Entity as RegistrationPeriods;
pub use super::service_requests::Entity as ServiceRequests;
pub use super::student_profiles::Entity as StudentProfiles;
pub use super::submissions::Entity as Submissions;
pub use super::system_settings::Entity as SystemSettings;
pub use super::users::Entity as Users;
