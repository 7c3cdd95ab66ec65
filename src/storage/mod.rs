use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（含档案，同一事务）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息（含档案）
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计用户数量
    async fn count_users(&self) -> Result<u64>;

    /// 课程管理方法
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>>;
    async fn get_course_by_code(&self, code: &str) -> Result<Option<Course>>;
    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse>;
    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>>;
    async fn delete_course(&self, id: i64) -> Result<bool>;

    /// 选课管理方法
    // 创建选课记录（已退选的记录会被重新激活）
    async fn create_enrollment(&self, course_id: i64, student_id: i64) -> Result<Enrollment>;
    // 获取某学生对某课程的选课记录
    async fn get_enrollment(&self, course_id: i64, student_id: i64)
    -> Result<Option<Enrollment>>;
    // 统计课程当前有效选课人数
    async fn count_active_enrollments(&self, course_id: i64) -> Result<u64>;
    // 退选（状态置为 dropped）
    async fn drop_enrollment(&self, course_id: i64, student_id: i64) -> Result<bool>;
    // 列出选课记录（附课程摘要）
    async fn list_enrollments_with_pagination(
        &self,
        query: EnrollmentListQuery,
    ) -> Result<EnrollmentListResponse>;
    // 学生当前有效选课的课程ID列表
    async fn list_enrolled_course_ids(&self, student_id: i64) -> Result<Vec<i64>>;
    // 课程当前有效选课的学生ID列表
    async fn list_enrolled_student_ids(&self, course_id: i64) -> Result<Vec<i64>>;

    /// 作业管理方法
    async fn create_assignment(
        &self,
        created_by: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment>;
    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>>;
    async fn list_assignments_with_pagination(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse>;
    async fn update_assignment(
        &self,
        id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>>;
    async fn delete_assignment(&self, id: i64) -> Result<bool>;

    /// 作业提交方法
    // 提交作业：同一 (assignment, student) 重复提交走更新并清空评分
    async fn upsert_submission(
        &self,
        assignment_id: i64,
        student_id: i64,
        content: String,
        late: bool,
    ) -> Result<Submission>;
    async fn get_submission_by_id(&self, id: i64) -> Result<Option<Submission>>;
    async fn get_submission_by_assignment_and_student(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>>;
    async fn list_submissions_with_pagination(
        &self,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse>;
    // 评分
    async fn grade_submission(
        &self,
        id: i64,
        score: f64,
        feedback: Option<String>,
        graded_by: i64,
    ) -> Result<Option<Submission>>;

    /// 测验管理方法
    async fn create_quiz(&self, created_by: i64, req: CreateQuizRequest) -> Result<Quiz>;
    async fn get_quiz_by_id(&self, id: i64) -> Result<Option<Quiz>>;
    async fn list_quizzes_with_pagination(&self, query: QuizListQuery) -> Result<QuizListResponse>;
    // 发布/取消发布
    async fn set_quiz_published(&self, id: i64, published: bool) -> Result<Option<Quiz>>;
    async fn delete_quiz(&self, id: i64) -> Result<bool>;
    // 题目
    async fn add_quiz_question(
        &self,
        quiz_id: i64,
        req: CreateQuestionRequest,
    ) -> Result<QuizQuestion>;
    async fn list_quiz_questions(&self, quiz_id: i64) -> Result<Vec<QuizQuestion>>;
    async fn delete_quiz_question(&self, quiz_id: i64, question_id: i64) -> Result<bool>;
    // 答题
    async fn count_quiz_attempts(&self, quiz_id: i64, student_id: i64) -> Result<u64>;
    async fn create_quiz_attempt(&self, quiz_id: i64, student_id: i64) -> Result<QuizAttempt>;
    async fn get_quiz_attempt_by_id(&self, id: i64) -> Result<Option<QuizAttempt>>;
    // 提交答题：写入作答明细并落分，同一事务
    async fn submit_quiz_attempt(
        &self,
        attempt_id: i64,
        answers: Vec<(i64, i32)>,
        score: f64,
    ) -> Result<QuizAttempt>;
    async fn list_quiz_attempt_answers(&self, attempt_id: i64) -> Result<Vec<QuizAnswer>>;
    async fn list_quiz_attempts(&self, quiz_id: i64, student_id: Option<i64>)
    -> Result<Vec<QuizAttempt>>;

    /// 费用管理方法
    async fn create_fee(&self, req: CreateFeeRequest) -> Result<Fee>;
    async fn get_fee_by_id(&self, id: i64) -> Result<Option<Fee>>;
    async fn list_fees_with_pagination(&self, query: FeeListQuery) -> Result<FeeListResponse>;
    // 缴费：校验余额、累加已缴、推导状态，同一事务
    async fn apply_payment(
        &self,
        fee_id: i64,
        amount: f64,
        method: String,
        reference: String,
    ) -> Result<(Payment, Fee)>;
    async fn list_payments(&self, fee_id: i64) -> Result<Vec<Payment>>;

    /// 公告与通知方法
    // 发布公告并向接收者扇出通知，同一事务
    async fn create_announcement(
        &self,
        author_id: i64,
        course_id: Option<i64>,
        title: String,
        body: String,
        recipients: Vec<i64>,
    ) -> Result<(Announcement, u64)>;
    async fn list_announcements_with_pagination(
        &self,
        query: AnnouncementListQuery,
    ) -> Result<AnnouncementListResponse>;
    // 活跃用户ID（全局公告的接收者）
    async fn list_active_user_ids(&self) -> Result<Vec<i64>>;
    // 批量写入通知
    async fn insert_notifications(&self, notifications: Vec<NewNotification>) -> Result<u64>;
    async fn list_notifications_with_pagination(
        &self,
        user_id: i64,
        page: Option<i64>,
        size: Option<i64>,
        unread_only: bool,
    ) -> Result<NotificationListResponse>;
    async fn mark_notification_read(&self, id: i64, user_id: i64) -> Result<bool>;
    async fn mark_all_notifications_read(&self, user_id: i64) -> Result<u64>;
    async fn count_unread_notifications(&self, user_id: i64) -> Result<i64>;

    /// 站内信方法
    async fn create_message(&self, sender_id: i64, req: SendMessageRequest) -> Result<Message>;
    async fn get_message_by_id(&self, id: i64) -> Result<Option<Message>>;
    async fn list_messages_with_pagination(
        &self,
        query: MessageListQuery,
    ) -> Result<MessageListResponse>;
    async fn mark_message_read(&self, id: i64, recipient_id: i64) -> Result<bool>;

    /// 图书馆方法
    async fn create_book(&self, req: CreateBookRequest) -> Result<Book>;
    async fn get_book_by_id(&self, id: i64) -> Result<Option<Book>>;
    async fn get_book_by_isbn(&self, isbn: &str) -> Result<Option<Book>>;
    async fn list_books_with_pagination(&self, query: BookListQuery) -> Result<BookListResponse>;
    async fn update_book(&self, id: i64, update: UpdateBookRequest) -> Result<Option<Book>>;
    async fn delete_book(&self, id: i64) -> Result<bool>;
    // 借书：校验在馆余量并扣减，同一事务
    async fn create_borrowing(
        &self,
        book_id: i64,
        user_id: i64,
        due_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<Borrowing>;
    // 还书：落归还时间与罚金并回补余量，同一事务
    async fn return_borrowing(&self, borrowing_id: i64, fine: f64) -> Result<Borrowing>;
    async fn get_borrowing_by_id(&self, id: i64) -> Result<Option<Borrowing>>;
    // 某用户对某书未归还的借阅记录
    async fn get_outstanding_borrowing(
        &self,
        book_id: i64,
        user_id: i64,
    ) -> Result<Option<Borrowing>>;
    async fn list_borrowings_with_pagination(
        &self,
        query: BorrowingListQuery,
    ) -> Result<BorrowingListResponse>;

    /// 自助申请方法
    async fn create_service_request(
        &self,
        student_id: i64,
        req: CreateServiceRequest,
    ) -> Result<ServiceRequest>;
    async fn get_service_request_by_id(&self, id: i64) -> Result<Option<ServiceRequest>>;
    async fn list_service_requests_with_pagination(
        &self,
        query: ServiceRequestListQuery,
    ) -> Result<ServiceRequestListResponse>;
    // 审批（仅 pending 可审批）
    async fn decide_service_request(
        &self,
        id: i64,
        approve: bool,
        decided_by: i64,
        remark: Option<String>,
    ) -> Result<Option<ServiceRequest>>;

    /// 入学申请方法
    async fn create_application(&self, req: CreateApplicationRequest) -> Result<Application>;
    async fn get_application_by_id(&self, id: i64) -> Result<Option<Application>>;
    async fn list_applications_with_pagination(
        &self,
        query: ApplicationListQuery,
    ) -> Result<ApplicationListResponse>;
    // 审核（仅 pending 可审核）
    async fn review_application(
        &self,
        id: i64,
        admit: bool,
        reviewed_by: i64,
    ) -> Result<Option<Application>>;

    /// 操作日志方法
    async fn insert_activity_log(&self, log: NewActivityLog) -> Result<ActivityLog>;
    async fn list_activity_logs_with_pagination(
        &self,
        query: ActivityLogListQuery,
    ) -> Result<ActivityLogListResponse>;

    /// 系统设置方法
    async fn list_all_settings(&self) -> Result<Vec<SystemSetting>>;
    async fn get_setting(&self, key: &str) -> Result<Option<SystemSetting>>;
    async fn upsert_settings(
        &self,
        settings: Vec<(String, String)>,
        updated_by: i64,
    ) -> Result<Vec<SystemSetting>>;
    // 选课时间窗
    async fn create_registration_period(
        &self,
        req: CreateRegistrationPeriodRequest,
    ) -> Result<RegistrationPeriod>;
    async fn get_registration_period_by_id(&self, id: i64) -> Result<Option<RegistrationPeriod>>;
    async fn list_registration_periods(&self) -> Result<Vec<RegistrationPeriod>>;
    async fn set_registration_period_active(
        &self,
        id: i64,
        active: bool,
    ) -> Result<Option<RegistrationPeriod>>;
    // 当前处于开放状态的时间窗
    async fn get_open_registration_period(
        &self,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Result<Option<RegistrationPeriod>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
