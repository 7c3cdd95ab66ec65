use serde::{Deserialize, Serialize};

// 操作日志
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityLog {
    pub id: i64,
    pub user_id: i64,
    // 动作标识，如 "enrollment.create"、"fee.pay"
    pub action: String,
    // 目标描述，如 "course:12"
    pub target: Option<String>,
    pub detail: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 待写入的日志行
#[derive(Debug, Clone)]
pub struct NewActivityLog {
    pub user_id: i64,
    pub action: String,
    pub target: Option<String>,
    pub detail: Option<String>,
}
