use serde::{Deserialize, Serialize};

// 自助申请类型
//
// 成绩证明 / 离校清关 / 补办校园卡共用同一套生命周期，
// 以 kind 区分，存同一张表。
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    Certificate,
    Clearance,
    IdCard,
}

impl<'de> Deserialize<'de> for RequestKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "certificate" => Ok(RequestKind::Certificate),
            "clearance" => Ok(RequestKind::Clearance),
            "id_card" => Ok(RequestKind::IdCard),
            _ => Err(serde::de::Error::custom(format!(
                "无效的申请类型: '{s}'. 支持的类型: certificate, clearance, id_card"
            ))),
        }
    }
}

impl std::fmt::Display for RequestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestKind::Certificate => write!(f, "certificate"),
            RequestKind::Clearance => write!(f, "clearance"),
            RequestKind::IdCard => write!(f, "id_card"),
        }
    }
}

impl std::str::FromStr for RequestKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "certificate" => Ok(RequestKind::Certificate),
            "clearance" => Ok(RequestKind::Clearance),
            "id_card" => Ok(RequestKind::IdCard),
            _ => Err(format!("Invalid request kind: {s}")),
        }
    }
}

// 申请状态
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl<'de> Deserialize<'de> for RequestStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "pending" => Ok(RequestStatus::Pending),
            "approved" => Ok(RequestStatus::Approved),
            "rejected" => Ok(RequestStatus::Rejected),
            _ => Err(serde::de::Error::custom(format!(
                "无效的申请状态: '{s}'. 支持的状态: pending, approved, rejected"
            ))),
        }
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestStatus::Pending => write!(f, "pending"),
            RequestStatus::Approved => write!(f, "approved"),
            RequestStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for RequestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(RequestStatus::Pending),
            "approved" => Ok(RequestStatus::Approved),
            "rejected" => Ok(RequestStatus::Rejected),
            _ => Err(format!("Invalid request status: {s}")),
        }
    }
}

// 自助申请
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceRequest {
    pub id: i64,
    pub student_id: i64,
    pub kind: RequestKind,
    pub details: Option<String>,
    pub status: RequestStatus,
    pub decided_by: Option<i64>,
    pub decided_at: Option<chrono::DateTime<chrono::Utc>>,
    pub remark: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
