use super::SeaOrmStorage;
use crate::entity::quiz_answers::{ActiveModel as AnswerActiveModel, Column as AnswerColumn, Entity as QuizAnswers};
use crate::entity::quiz_attempts::{
    ActiveModel as AttemptActiveModel, Column as AttemptColumn, Entity as QuizAttempts,
};
use crate::entity::quiz_questions::{
    ActiveModel as QuestionActiveModel, Column as QuestionColumn, Entity as QuizQuestions,
};
use crate::entity::quizzes::{ActiveModel, Column, Entity as Quizzes};
use crate::errors::{PortalError, Result};
use crate::models::{
    PaginationInfo,
    quizzes::{
        entities::{Quiz, QuizAnswer, QuizAttempt, QuizQuestion},
        requests::{CreateQuestionRequest, CreateQuizRequest, QuizListQuery},
        responses::QuizListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

const DEFAULT_MAX_ATTEMPTS: i32 = 1;
const DEFAULT_QUESTION_POINTS: f64 = 1.0;

impl SeaOrmStorage {
    /// 创建测验（初始为未发布）
    pub async fn create_quiz_impl(&self, created_by: i64, req: CreateQuizRequest) -> Result<Quiz> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            course_id: Set(req.course_id),
            created_by: Set(created_by),
            title: Set(req.title),
            duration_minutes: Set(req.duration_minutes),
            max_attempts: Set(req.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS)),
            published: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("创建测验失败: {e}")))?;

        Ok(result.into_quiz())
    }

    /// 通过 ID 获取测验
    pub async fn get_quiz_by_id_impl(&self, id: i64) -> Result<Option<Quiz>> {
        let result = Quizzes::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询测验失败: {e}")))?;

        Ok(result.map(|m| m.into_quiz()))
    }

    /// 分页列出测验
    pub async fn list_quizzes_with_pagination_impl(
        &self,
        query: QuizListQuery,
    ) -> Result<QuizListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Quizzes::find();

        if let Some(course_id) = query.course_id {
            select = select.filter(Column::CourseId.eq(course_id));
        }

        // 学生视角只看已发布的
        if query.published_only {
            select = select.filter(Column::Published.eq(true));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询测验总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询测验页数失败: {e}")))?;

        let quizzes = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询测验列表失败: {e}")))?;

        Ok(QuizListResponse {
            items: quizzes.into_iter().map(|m| m.into_quiz()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 发布 / 取消发布测验
    pub async fn set_quiz_published_impl(&self, id: i64, published: bool) -> Result<Option<Quiz>> {
        if Quizzes::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询测验失败: {e}")))?
            .is_none()
        {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(id),
            published: Set(published),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("更新测验发布状态失败: {e}")))?;

        Ok(Some(result.into_quiz()))
    }

    /// 删除测验
    pub async fn delete_quiz_impl(&self, id: i64) -> Result<bool> {
        let result = Quizzes::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("删除测验失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 添加题目（追加到末尾）
    pub async fn add_quiz_question_impl(
        &self,
        quiz_id: i64,
        req: CreateQuestionRequest,
    ) -> Result<QuizQuestion> {
        let position = QuizQuestions::find()
            .filter(QuestionColumn::QuizId.eq(quiz_id))
            .count(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("统计题目数量失败: {e}")))?
            as i32;

        let options = serde_json::to_string(&req.options)
            .map_err(|e| PortalError::validation(format!("序列化选项失败: {e}")))?;

        let model = QuestionActiveModel {
            quiz_id: Set(quiz_id),
            text: Set(req.text),
            options: Set(options),
            correct_option: Set(req.correct_option),
            points: Set(req.points.unwrap_or(DEFAULT_QUESTION_POINTS)),
            position: Set(position),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("添加题目失败: {e}")))?;

        Ok(result.into_question())
    }

    /// 列出测验题目（按出题顺序）
    pub async fn list_quiz_questions_impl(&self, quiz_id: i64) -> Result<Vec<QuizQuestion>> {
        let questions = QuizQuestions::find()
            .filter(QuestionColumn::QuizId.eq(quiz_id))
            .order_by_asc(QuestionColumn::Position)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询题目失败: {e}")))?;

        Ok(questions.into_iter().map(|m| m.into_question()).collect())
    }

    /// 删除题目
    pub async fn delete_quiz_question_impl(&self, quiz_id: i64, question_id: i64) -> Result<bool> {
        let result = QuizQuestions::delete_many()
            .filter(QuestionColumn::Id.eq(question_id))
            .filter(QuestionColumn::QuizId.eq(quiz_id))
            .exec(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("删除题目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 某学生对某测验已有的尝试次数
    pub async fn count_quiz_attempts_impl(&self, quiz_id: i64, student_id: i64) -> Result<u64> {
        let count = QuizAttempts::find()
            .filter(AttemptColumn::QuizId.eq(quiz_id))
            .filter(AttemptColumn::StudentId.eq(student_id))
            .count(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("统计答题次数失败: {e}")))?;

        Ok(count)
    }

    /// 开始一次答题
    pub async fn create_quiz_attempt_impl(
        &self,
        quiz_id: i64,
        student_id: i64,
    ) -> Result<QuizAttempt> {
        let now = chrono::Utc::now().timestamp();

        let attempt_number = self.count_quiz_attempts_impl(quiz_id, student_id).await? as i32 + 1;

        let model = AttemptActiveModel {
            quiz_id: Set(quiz_id),
            student_id: Set(student_id),
            attempt_number: Set(attempt_number),
            started_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("创建答题记录失败: {e}")))?;

        Ok(result.into_attempt())
    }

    /// 通过 ID 获取答题记录
    pub async fn get_quiz_attempt_by_id_impl(&self, id: i64) -> Result<Option<QuizAttempt>> {
        let result = QuizAttempts::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询答题记录失败: {e}")))?;

        Ok(result.map(|m| m.into_attempt()))
    }

    /// 提交答题：写入作答明细并落分，同一事务
    pub async fn submit_quiz_attempt_impl(
        &self,
        attempt_id: i64,
        answers: Vec<(i64, i32)>,
        score: f64,
    ) -> Result<QuizAttempt> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| PortalError::database_operation(format!("开启事务失败: {e}")))?;

        for (question_id, selected_option) in answers {
            AnswerActiveModel {
                attempt_id: Set(attempt_id),
                question_id: Set(question_id),
                selected_option: Set(selected_option),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(|e| PortalError::database_operation(format!("写入作答失败: {e}")))?;
        }

        let model = AttemptActiveModel {
            id: Set(attempt_id),
            submitted_at: Set(Some(now)),
            score: Set(Some(score)),
            ..Default::default()
        };

        let result = model
            .update(&txn)
            .await
            .map_err(|e| PortalError::database_operation(format!("提交答题失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| PortalError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.into_attempt())
    }

    /// 列出某次答题的作答明细
    pub async fn list_quiz_attempt_answers_impl(&self, attempt_id: i64) -> Result<Vec<QuizAnswer>> {
        let answers = QuizAnswers::find()
            .filter(AnswerColumn::AttemptId.eq(attempt_id))
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询作答明细失败: {e}")))?;

        Ok(answers.into_iter().map(|m| m.into_answer()).collect())
    }

    /// 列出某测验的答题记录（可按学生过滤）
    pub async fn list_quiz_attempts_impl(
        &self,
        quiz_id: i64,
        student_id: Option<i64>,
    ) -> Result<Vec<QuizAttempt>> {
        let mut select = QuizAttempts::find().filter(AttemptColumn::QuizId.eq(quiz_id));

        if let Some(student_id) = student_id {
            select = select.filter(AttemptColumn::StudentId.eq(student_id));
        }

        let attempts = select
            .order_by_desc(AttemptColumn::StartedAt)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询答题记录失败: {e}")))?;

        Ok(attempts.into_iter().map(|m| m.into_attempt()).collect())
    }
}
