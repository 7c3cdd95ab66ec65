use chrono::{DateTime, Utc};
use serde::Deserialize;

/// 更新系统设置请求：key -> value
#[derive(Debug, Deserialize)]
pub struct UpdateSettingsRequest {
    pub settings: Vec<SettingItem>,
}

#[derive(Debug, Deserialize)]
pub struct SettingItem {
    pub key: String,
    pub value: String,
}

/// 创建选课时间窗请求
#[derive(Debug, Deserialize)]
pub struct CreateRegistrationPeriodRequest {
    pub session: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}
