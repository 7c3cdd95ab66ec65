use super::entities::{RegistrationPeriod, SystemSetting};
use serde::Serialize;

// 系统设置响应
#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub settings: Vec<SystemSetting>,
}

// 选课时间窗响应
#[derive(Debug, Serialize)]
pub struct RegistrationPeriodResponse {
    pub period: RegistrationPeriod,
    pub open: bool,
}
