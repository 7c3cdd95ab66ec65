use serde::{Deserialize, Serialize};

// 通知
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub body: String,
    // 通知类别：announcement / grade / request / application / library
    pub kind: String,
    pub read: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 待插入的通知（fan-out 用）
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub user_id: i64,
    pub title: String,
    pub body: String,
    pub kind: String,
}
