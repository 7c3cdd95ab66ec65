use serde::{Deserialize, Serialize};

// 系统设置项
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemSetting {
    pub key: String,
    pub value: String,
    pub updated_by: Option<i64>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 选课时间窗
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationPeriod {
    pub id: i64,
    // 学年，如 "2025/2026"
    pub session: String,
    pub starts_at: chrono::DateTime<chrono::Utc>,
    pub ends_at: chrono::DateTime<chrono::Utc>,
    pub active: bool,
}

impl RegistrationPeriod {
    /// 当前时刻是否处于开放窗口内
    pub fn is_open(&self, now: chrono::DateTime<chrono::Utc>) -> bool {
        self.active && now >= self.starts_at && now <= self.ends_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn period(active: bool, from_h: i64, to_h: i64) -> RegistrationPeriod {
        let now = Utc::now();
        RegistrationPeriod {
            id: 1,
            session: "2025/2026".into(),
            starts_at: now + Duration::hours(from_h),
            ends_at: now + Duration::hours(to_h),
            active,
        }
    }

    #[test]
    fn test_is_open() {
        let now = Utc::now();
        assert!(period(true, -1, 1).is_open(now));
        assert!(!period(true, 1, 2).is_open(now));
        assert!(!period(true, -2, -1).is_open(now));
        assert!(!period(false, -1, 1).is_open(now));
    }
}
