use serde::{Deserialize, Serialize};

// 入学申请状态
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Admitted,
    Rejected,
}

impl<'de> Deserialize<'de> for ApplicationStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "pending" => Ok(ApplicationStatus::Pending),
            "admitted" => Ok(ApplicationStatus::Admitted),
            "rejected" => Ok(ApplicationStatus::Rejected),
            _ => Err(serde::de::Error::custom(format!(
                "无效的入学申请状态: '{s}'. 支持的状态: pending, admitted, rejected"
            ))),
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplicationStatus::Pending => write!(f, "pending"),
            ApplicationStatus::Admitted => write!(f, "admitted"),
            ApplicationStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ApplicationStatus::Pending),
            "admitted" => Ok(ApplicationStatus::Admitted),
            "rejected" => Ok(ApplicationStatus::Rejected),
            _ => Err(format!("Invalid application status: {s}")),
        }
    }
}

// 入学申请
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub id: i64,
    pub applicant_name: String,
    pub email: String,
    pub program: String,
    // 申请材料说明（外部对象存储的引用由调用方自行携带）
    pub documents: Option<String>,
    pub status: ApplicationStatus,
    pub reviewed_by: Option<i64>,
    pub reviewed_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
