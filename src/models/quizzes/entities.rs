use serde::{Deserialize, Serialize};

// 测验
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub id: i64,
    pub course_id: i64,
    pub created_by: i64,
    pub title: String,
    // 答题时长（分钟），None 表示不限时
    pub duration_minutes: Option<i32>,
    // 每名学生的最大尝试次数
    pub max_attempts: i32,
    pub published: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 测验题目（单选）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: i64,
    pub quiz_id: i64,
    pub text: String,
    // 选项文本列表
    pub options: Vec<String>,
    // 正确选项下标；学生视角的响应会剔除该字段
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_option: Option<i32>,
    pub points: f64,
    // 题目顺序
    pub position: i32,
}

impl QuizQuestion {
    /// 学生视角：隐藏正确答案
    pub fn without_answer(mut self) -> Self {
        self.correct_option = None;
        self
    }
}

// 答题尝试
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizAttempt {
    pub id: i64,
    pub quiz_id: i64,
    pub student_id: i64,
    pub attempt_number: i32,
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub submitted_at: Option<chrono::DateTime<chrono::Utc>>,
    // 提交后才有分数
    pub score: Option<f64>,
}

// 单题作答
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizAnswer {
    pub id: i64,
    pub attempt_id: i64,
    pub question_id: i64,
    pub selected_option: i32,
}
