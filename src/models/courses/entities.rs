use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    // 课程ID
    pub id: i64,
    // 课程代码，如 "CSC301"
    pub code: String,
    // 课程名称
    pub title: String,
    // 课程简介
    pub description: Option<String>,
    // 授课讲师ID
    pub lecturer_id: i64,
    // 学分
    pub credit_units: i32,
    // 开课学期，如 "2025/2026-1"
    pub semester: String,
    // 选课人数上限
    pub max_students: i32,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
