use super::entities::{Quiz, QuizAnswer, QuizAttempt, QuizQuestion};
use crate::models::common::pagination::PaginationInfo;
use serde::Serialize;

// 测验列表响应
#[derive(Debug, Serialize)]
pub struct QuizListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<Quiz>,
}

// 测验详情（含题目）
#[derive(Debug, Serialize)]
pub struct QuizDetailResponse {
    pub quiz: Quiz,
    pub questions: Vec<QuizQuestion>,
}

// 尝试详情（含作答）
#[derive(Debug, Serialize)]
pub struct AttemptDetailResponse {
    pub attempt: QuizAttempt,
    pub answers: Vec<QuizAnswer>,
}

// 提交答题后的结果
#[derive(Debug, Serialize)]
pub struct AttemptResultResponse {
    pub attempt_id: i64,
    pub score: f64,
    pub max_score: f64,
}
