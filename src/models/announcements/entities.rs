use serde::{Deserialize, Serialize};

// 公告
//
// course_id 为空时面向全体活跃用户，否则面向该课程已选课学生。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Announcement {
    pub id: i64,
    pub author_id: i64,
    pub course_id: Option<i64>,
    pub title: String,
    pub body: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
