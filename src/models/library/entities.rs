use serde::{Deserialize, Serialize};

// 馆藏图书
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub total_copies: i32,
    pub available_copies: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 借阅记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Borrowing {
    pub id: i64,
    pub book_id: i64,
    pub user_id: i64,
    pub borrowed_at: chrono::DateTime<chrono::Utc>,
    pub due_at: chrono::DateTime<chrono::Utc>,
    pub returned_at: Option<chrono::DateTime<chrono::Utc>>,
    // 归还时结算的逾期罚金
    pub fine: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_title: Option<String>,
}

/// 逾期罚金：按自然日计，未逾期为 0
pub fn overdue_fine(
    due_at: chrono::DateTime<chrono::Utc>,
    returned_at: chrono::DateTime<chrono::Utc>,
    fine_per_day: f64,
) -> f64 {
    let days_late = (returned_at - due_at).num_days();
    if days_late <= 0 {
        0.0
    } else {
        days_late as f64 * fine_per_day
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn test_no_fine_when_on_time() {
        let due = Utc::now();
        assert_eq!(overdue_fine(due, due - Duration::hours(2), 50.0), 0.0);
    }

    #[test]
    fn test_fine_per_day() {
        let due = Utc::now();
        assert_eq!(overdue_fine(due, due + Duration::days(3), 50.0), 150.0);
    }

    #[test]
    fn test_partial_day_not_counted() {
        let due = Utc::now();
        assert_eq!(overdue_fine(due, due + Duration::hours(20), 50.0), 0.0);
    }
}
