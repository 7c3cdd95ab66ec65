use crate::models::common::pagination::PaginationQuery;
use serde::Deserialize;

/// 创建测验请求
#[derive(Debug, Deserialize)]
pub struct CreateQuizRequest {
    pub course_id: i64,
    pub title: String,
    pub duration_minutes: Option<i32>,
    pub max_attempts: Option<i32>,
}

/// 添加题目请求
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub text: String,
    pub options: Vec<String>,
    pub correct_option: i32,
    pub points: Option<f64>,
}

/// 提交答题请求：question_id -> 选项下标
#[derive(Debug, Deserialize)]
pub struct SubmitAttemptRequest {
    pub answers: Vec<AttemptAnswer>,
}

#[derive(Debug, Deserialize)]
pub struct AttemptAnswer {
    pub question_id: i64,
    pub selected_option: i32,
}

/// 测验列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize)]
pub struct QuizListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct QuizListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub course_id: Option<i64>,
    // 学生视角只看已发布的
    pub published_only: bool,
}
