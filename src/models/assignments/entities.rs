use serde::{Deserialize, Serialize};

// 作业
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub id: i64,
    pub course_id: i64,
    pub created_by: i64,
    pub title: String,
    pub instructions: Option<String>,
    pub max_score: f64,
    // 截止时间，None 表示不限
    pub due_at: Option<chrono::DateTime<chrono::Utc>>,
    pub allow_late: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Assignment {
    /// 当前时刻是否已过截止时间
    pub fn is_past_due(&self, now: chrono::DateTime<chrono::Utc>) -> bool {
        self.due_at.map(|due| now > due).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn assignment(due_at: Option<chrono::DateTime<Utc>>) -> Assignment {
        Assignment {
            id: 1,
            course_id: 1,
            created_by: 1,
            title: "Lab 1".into(),
            instructions: None,
            max_score: 100.0,
            due_at,
            allow_late: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_past_due() {
        let now = Utc::now();
        assert!(assignment(Some(now - Duration::hours(1))).is_past_due(now));
        assert!(!assignment(Some(now + Duration::hours(1))).is_past_due(now));
        assert!(!assignment(None).is_past_due(now));
    }
}
