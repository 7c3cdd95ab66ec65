//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod activity;
mod announcements;
mod applications;
mod assignments;
mod courses;
mod enrollments;
mod fees;
mod library;
mod messages;
mod notifications;
mod quizzes;
mod service_requests;
mod submissions;
mod system;
mod users;

use crate::config::AppConfig;
use crate::errors::{PortalError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| PortalError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| PortalError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| PortalError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| PortalError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(PortalError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    activity::{
        entities::{ActivityLog, NewActivityLog},
        requests::ActivityLogListQuery,
        responses::ActivityLogListResponse,
    },
    announcements::{
        entities::Announcement, requests::AnnouncementListQuery,
        responses::AnnouncementListResponse,
    },
    applications::{
        entities::Application,
        requests::{ApplicationListQuery, CreateApplicationRequest},
        responses::ApplicationListResponse,
    },
    assignments::{
        entities::Assignment,
        requests::{AssignmentListQuery, CreateAssignmentRequest, UpdateAssignmentRequest},
        responses::AssignmentListResponse,
    },
    courses::{
        entities::Course,
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
        responses::CourseListResponse,
    },
    enrollments::{
        entities::Enrollment, requests::EnrollmentListQuery, responses::EnrollmentListResponse,
    },
    fees::{
        entities::{Fee, Payment},
        requests::{CreateFeeRequest, FeeListQuery},
        responses::FeeListResponse,
    },
    library::{
        entities::{Book, Borrowing},
        requests::{BookListQuery, BorrowingListQuery, CreateBookRequest, UpdateBookRequest},
        responses::{BookListResponse, BorrowingListResponse},
    },
    messages::{
        entities::Message,
        requests::{MessageListQuery, SendMessageRequest},
        responses::MessageListResponse,
    },
    notifications::{entities::NewNotification, responses::NotificationListResponse},
    quizzes::{
        entities::{Quiz, QuizAnswer, QuizAttempt, QuizQuestion},
        requests::{CreateQuestionRequest, CreateQuizRequest, QuizListQuery},
        responses::QuizListResponse,
    },
    requests::{
        entities::ServiceRequest,
        requests::{CreateServiceRequest, ServiceRequestListQuery},
        responses::ServiceRequestListResponse,
    },
    submissions::{
        entities::Submission, requests::SubmissionListQuery, responses::SubmissionListResponse,
    },
    system::{
        entities::{RegistrationPeriod, SystemSetting},
        requests::CreateRegistrationPeriodRequest,
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 课程模块
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(id).await
    }

    async fn get_course_by_code(&self, code: &str) -> Result<Option<Course>> {
        self.get_course_by_code_impl(code).await
    }

    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        self.list_courses_with_pagination_impl(query).await
    }

    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>> {
        self.update_course_impl(id, update).await
    }

    async fn delete_course(&self, id: i64) -> Result<bool> {
        self.delete_course_impl(id).await
    }

    // 选课模块
    async fn create_enrollment(&self, course_id: i64, student_id: i64) -> Result<Enrollment> {
        self.create_enrollment_impl(course_id, student_id).await
    }

    async fn get_enrollment(
        &self,
        course_id: i64,
        student_id: i64,
    ) -> Result<Option<Enrollment>> {
        self.get_enrollment_impl(course_id, student_id).await
    }

    async fn count_active_enrollments(&self, course_id: i64) -> Result<u64> {
        self.count_active_enrollments_impl(course_id).await
    }

    async fn drop_enrollment(&self, course_id: i64, student_id: i64) -> Result<bool> {
        self.drop_enrollment_impl(course_id, student_id).await
    }

    async fn list_enrollments_with_pagination(
        &self,
        query: EnrollmentListQuery,
    ) -> Result<EnrollmentListResponse> {
        self.list_enrollments_with_pagination_impl(query).await
    }

    async fn list_enrolled_course_ids(&self, student_id: i64) -> Result<Vec<i64>> {
        self.list_enrolled_course_ids_impl(student_id).await
    }

    async fn list_enrolled_student_ids(&self, course_id: i64) -> Result<Vec<i64>> {
        self.list_enrolled_student_ids_impl(course_id).await
    }

    // 作业模块
    async fn create_assignment(
        &self,
        created_by: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        self.create_assignment_impl(created_by, req).await
    }

    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(id).await
    }

    async fn list_assignments_with_pagination(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse> {
        self.list_assignments_with_pagination_impl(query).await
    }

    async fn update_assignment(
        &self,
        id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        self.update_assignment_impl(id, update).await
    }

    async fn delete_assignment(&self, id: i64) -> Result<bool> {
        self.delete_assignment_impl(id).await
    }

    // 提交模块
    async fn upsert_submission(
        &self,
        assignment_id: i64,
        student_id: i64,
        content: String,
        late: bool,
    ) -> Result<Submission> {
        self.upsert_submission_impl(assignment_id, student_id, content, late)
            .await
    }

    async fn get_submission_by_id(&self, id: i64) -> Result<Option<Submission>> {
        self.get_submission_by_id_impl(id).await
    }

    async fn get_submission_by_assignment_and_student(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>> {
        self.get_submission_by_assignment_and_student_impl(assignment_id, student_id)
            .await
    }

    async fn list_submissions_with_pagination(
        &self,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse> {
        self.list_submissions_with_pagination_impl(query).await
    }

    async fn grade_submission(
        &self,
        id: i64,
        score: f64,
        feedback: Option<String>,
        graded_by: i64,
    ) -> Result<Option<Submission>> {
        self.grade_submission_impl(id, score, feedback, graded_by)
            .await
    }

    // 测验模块
    async fn create_quiz(&self, created_by: i64, req: CreateQuizRequest) -> Result<Quiz> {
        self.create_quiz_impl(created_by, req).await
    }

    async fn get_quiz_by_id(&self, id: i64) -> Result<Option<Quiz>> {
        self.get_quiz_by_id_impl(id).await
    }

    async fn list_quizzes_with_pagination(&self, query: QuizListQuery) -> Result<QuizListResponse> {
        self.list_quizzes_with_pagination_impl(query).await
    }

    async fn set_quiz_published(&self, id: i64, published: bool) -> Result<Option<Quiz>> {
        self.set_quiz_published_impl(id, published).await
    }

    async fn delete_quiz(&self, id: i64) -> Result<bool> {
        self.delete_quiz_impl(id).await
    }

    async fn add_quiz_question(
        &self,
        quiz_id: i64,
        req: CreateQuestionRequest,
    ) -> Result<QuizQuestion> {
        self.add_quiz_question_impl(quiz_id, req).await
    }

    async fn list_quiz_questions(&self, quiz_id: i64) -> Result<Vec<QuizQuestion>> {
        self.list_quiz_questions_impl(quiz_id).await
    }

    async fn delete_quiz_question(&self, quiz_id: i64, question_id: i64) -> Result<bool> {
        self.delete_quiz_question_impl(quiz_id, question_id).await
    }

    async fn count_quiz_attempts(&self, quiz_id: i64, student_id: i64) -> Result<u64> {
        self.count_quiz_attempts_impl(quiz_id, student_id).await
    }

    async fn create_quiz_attempt(&self, quiz_id: i64, student_id: i64) -> Result<QuizAttempt> {
        self.create_quiz_attempt_impl(quiz_id, student_id).await
    }

    async fn get_quiz_attempt_by_id(&self, id: i64) -> Result<Option<QuizAttempt>> {
        self.get_quiz_attempt_by_id_impl(id).await
    }

    async fn submit_quiz_attempt(
        &self,
        attempt_id: i64,
        answers: Vec<(i64, i32)>,
        score: f64,
    ) -> Result<QuizAttempt> {
        self.submit_quiz_attempt_impl(attempt_id, answers, score)
            .await
    }

    async fn list_quiz_attempt_answers(&self, attempt_id: i64) -> Result<Vec<QuizAnswer>> {
        self.list_quiz_attempt_answers_impl(attempt_id).await
    }

    async fn list_quiz_attempts(
        &self,
        quiz_id: i64,
        student_id: Option<i64>,
    ) -> Result<Vec<QuizAttempt>> {
        self.list_quiz_attempts_impl(quiz_id, student_id).await
    }

    // 费用模块
    async fn create_fee(&self, req: CreateFeeRequest) -> Result<Fee> {
        self.create_fee_impl(req).await
    }

    async fn get_fee_by_id(&self, id: i64) -> Result<Option<Fee>> {
        self.get_fee_by_id_impl(id).await
    }

    async fn list_fees_with_pagination(&self, query: FeeListQuery) -> Result<FeeListResponse> {
        self.list_fees_with_pagination_impl(query).await
    }

    async fn apply_payment(
        &self,
        fee_id: i64,
        amount: f64,
        method: String,
        reference: String,
    ) -> Result<(Payment, Fee)> {
        self.apply_payment_impl(fee_id, amount, method, reference)
            .await
    }

    async fn list_payments(&self, fee_id: i64) -> Result<Vec<Payment>> {
        self.list_payments_impl(fee_id).await
    }

    // 公告与通知模块
    async fn create_announcement(
        &self,
        author_id: i64,
        course_id: Option<i64>,
        title: String,
        body: String,
        recipients: Vec<i64>,
    ) -> Result<(Announcement, u64)> {
        self.create_announcement_impl(author_id, course_id, title, body, recipients)
            .await
    }

    async fn list_announcements_with_pagination(
        &self,
        query: AnnouncementListQuery,
    ) -> Result<AnnouncementListResponse> {
        self.list_announcements_with_pagination_impl(query).await
    }

    async fn list_active_user_ids(&self) -> Result<Vec<i64>> {
        self.list_active_user_ids_impl().await
    }

    async fn insert_notifications(&self, notifications: Vec<NewNotification>) -> Result<u64> {
        self.insert_notifications_impl(notifications).await
    }

    async fn list_notifications_with_pagination(
        &self,
        user_id: i64,
        page: Option<i64>,
        size: Option<i64>,
        unread_only: bool,
    ) -> Result<NotificationListResponse> {
        self.list_notifications_with_pagination_impl(user_id, page, size, unread_only)
            .await
    }

    async fn mark_notification_read(&self, id: i64, user_id: i64) -> Result<bool> {
        self.mark_notification_read_impl(id, user_id).await
    }

    async fn mark_all_notifications_read(&self, user_id: i64) -> Result<u64> {
        self.mark_all_notifications_read_impl(user_id).await
    }

    async fn count_unread_notifications(&self, user_id: i64) -> Result<i64> {
        self.count_unread_notifications_impl(user_id).await
    }

    // 站内信模块
    async fn create_message(&self, sender_id: i64, req: SendMessageRequest) -> Result<Message> {
        self.create_message_impl(sender_id, req).await
    }

    async fn get_message_by_id(&self, id: i64) -> Result<Option<Message>> {
        self.get_message_by_id_impl(id).await
    }

    async fn list_messages_with_pagination(
        &self,
        query: MessageListQuery,
    ) -> Result<MessageListResponse> {
        self.list_messages_with_pagination_impl(query).await
    }

    async fn mark_message_read(&self, id: i64, recipient_id: i64) -> Result<bool> {
        self.mark_message_read_impl(id, recipient_id).await
    }

    // 图书馆模块
    async fn create_book(&self, req: CreateBookRequest) -> Result<Book> {
        self.create_book_impl(req).await
    }

    async fn get_book_by_id(&self, id: i64) -> Result<Option<Book>> {
        self.get_book_by_id_impl(id).await
    }

    async fn get_book_by_isbn(&self, isbn: &str) -> Result<Option<Book>> {
        self.get_book_by_isbn_impl(isbn).await
    }

    async fn list_books_with_pagination(&self, query: BookListQuery) -> Result<BookListResponse> {
        self.list_books_with_pagination_impl(query).await
    }

    async fn update_book(&self, id: i64, update: UpdateBookRequest) -> Result<Option<Book>> {
        self.update_book_impl(id, update).await
    }

    async fn delete_book(&self, id: i64) -> Result<bool> {
        self.delete_book_impl(id).await
    }

    async fn create_borrowing(
        &self,
        book_id: i64,
        user_id: i64,
        due_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<Borrowing> {
        self.create_borrowing_impl(book_id, user_id, due_at).await
    }

    async fn return_borrowing(&self, borrowing_id: i64, fine: f64) -> Result<Borrowing> {
        self.return_borrowing_impl(borrowing_id, fine).await
    }

    async fn get_borrowing_by_id(&self, id: i64) -> Result<Option<Borrowing>> {
        self.get_borrowing_by_id_impl(id).await
    }

    async fn get_outstanding_borrowing(
        &self,
        book_id: i64,
        user_id: i64,
    ) -> Result<Option<Borrowing>> {
        self.get_outstanding_borrowing_impl(book_id, user_id).await
    }

    async fn list_borrowings_with_pagination(
        &self,
        query: BorrowingListQuery,
    ) -> Result<BorrowingListResponse> {
        self.list_borrowings_with_pagination_impl(query).await
    }

    // 自助申请模块
    async fn create_service_request(
        &self,
        student_id: i64,
        req: CreateServiceRequest,
    ) -> Result<ServiceRequest> {
        self.create_service_request_impl(student_id, req).await
    }

    async fn get_service_request_by_id(&self, id: i64) -> Result<Option<ServiceRequest>> {
        self.get_service_request_by_id_impl(id).await
    }

    async fn list_service_requests_with_pagination(
        &self,
        query: ServiceRequestListQuery,
    ) -> Result<ServiceRequestListResponse> {
        self.list_service_requests_with_pagination_impl(query).await
    }

    async fn decide_service_request(
        &self,
        id: i64,
        approve: bool,
        decided_by: i64,
        remark: Option<String>,
    ) -> Result<Option<ServiceRequest>> {
        self.decide_service_request_impl(id, approve, decided_by, remark)
            .await
    }

    // 入学申请模块
    async fn create_application(&self, req: CreateApplicationRequest) -> Result<Application> {
        self.create_application_impl(req).await
    }

    async fn get_application_by_id(&self, id: i64) -> Result<Option<Application>> {
        self.get_application_by_id_impl(id).await
    }

    async fn list_applications_with_pagination(
        &self,
        query: ApplicationListQuery,
    ) -> Result<ApplicationListResponse> {
        self.list_applications_with_pagination_impl(query).await
    }

    async fn review_application(
        &self,
        id: i64,
        admit: bool,
        reviewed_by: i64,
    ) -> Result<Option<Application>> {
        self.review_application_impl(id, admit, reviewed_by).await
    }

    // 操作日志模块
    async fn insert_activity_log(&self, log: NewActivityLog) -> Result<ActivityLog> {
        self.insert_activity_log_impl(log).await
    }

    async fn list_activity_logs_with_pagination(
        &self,
        query: ActivityLogListQuery,
    ) -> Result<ActivityLogListResponse> {
        self.list_activity_logs_with_pagination_impl(query).await
    }

    // 系统设置模块
    async fn list_all_settings(&self) -> Result<Vec<SystemSetting>> {
        self.list_all_settings_impl().await
    }

    async fn get_setting(&self, key: &str) -> Result<Option<SystemSetting>> {
        self.get_setting_impl(key).await
    }

    async fn upsert_settings(
        &self,
        settings: Vec<(String, String)>,
        updated_by: i64,
    ) -> Result<Vec<SystemSetting>> {
        self.upsert_settings_impl(settings, updated_by).await
    }

    async fn create_registration_period(
        &self,
        req: CreateRegistrationPeriodRequest,
    ) -> Result<RegistrationPeriod> {
        self.create_registration_period_impl(req).await
    }

    async fn get_registration_period_by_id(&self, id: i64) -> Result<Option<RegistrationPeriod>> {
        self.get_registration_period_by_id_impl(id).await
    }

    async fn list_registration_periods(&self) -> Result<Vec<RegistrationPeriod>> {
        self.list_registration_periods_impl().await
    }

    async fn set_registration_period_active(
        &self,
        id: i64,
        active: bool,
    ) -> Result<Option<RegistrationPeriod>> {
        self.set_registration_period_active_impl(id, active).await
    }

    async fn get_open_registration_period(
        &self,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Result<Option<RegistrationPeriod>> {
        self.get_open_registration_period_impl(now).await
    }
}
