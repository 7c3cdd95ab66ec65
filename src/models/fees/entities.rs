use serde::{Deserialize, Serialize};

// 费用状态
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum FeeStatus {
    Pending, // 待缴
    Partial, // 部分缴纳
    Paid,    // 已缴清
}

impl<'de> Deserialize<'de> for FeeStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "pending" => Ok(FeeStatus::Pending),
            "partial" => Ok(FeeStatus::Partial),
            "paid" => Ok(FeeStatus::Paid),
            _ => Err(serde::de::Error::custom(format!(
                "无效的费用状态: '{s}'. 支持的状态: pending, partial, paid"
            ))),
        }
    }
}

impl std::fmt::Display for FeeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeeStatus::Pending => write!(f, "pending"),
            FeeStatus::Partial => write!(f, "partial"),
            FeeStatus::Paid => write!(f, "paid"),
        }
    }
}

impl std::str::FromStr for FeeStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(FeeStatus::Pending),
            "partial" => Ok(FeeStatus::Partial),
            "paid" => Ok(FeeStatus::Paid),
            _ => Err(format!("Invalid fee status: {s}")),
        }
    }
}

// 费用账单
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fee {
    pub id: i64,
    pub student_id: i64,
    pub description: String,
    // 应缴金额
    pub amount: f64,
    // 已缴金额（payments 合计）
    pub paid: f64,
    // 学年，如 "2025/2026"
    pub session: String,
    pub due_at: Option<chrono::DateTime<chrono::Utc>>,
    pub status: FeeStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Fee {
    /// 剩余应缴金额
    pub fn balance(&self) -> f64 {
        (self.amount - self.paid).max(0.0)
    }

    /// 根据已缴金额推导状态
    pub fn derive_status(amount: f64, paid: f64) -> FeeStatus {
        if paid <= 0.0 {
            FeeStatus::Pending
        } else if paid + f64::EPSILON >= amount {
            FeeStatus::Paid
        } else {
            FeeStatus::Partial
        }
    }
}

// 缴费记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: i64,
    pub fee_id: i64,
    pub amount: f64,
    // 支付方式：bank_transfer / card / cash
    pub method: String,
    // 收据号
    pub reference: String,
    pub paid_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_status() {
        assert_eq!(Fee::derive_status(100.0, 0.0), FeeStatus::Pending);
        assert_eq!(Fee::derive_status(100.0, 40.0), FeeStatus::Partial);
        assert_eq!(Fee::derive_status(100.0, 100.0), FeeStatus::Paid);
    }

    #[test]
    fn test_balance_never_negative() {
        let fee = Fee {
            id: 1,
            student_id: 1,
            description: "Tuition".into(),
            amount: 100.0,
            paid: 100.0,
            session: "2025/2026".into(),
            due_at: None,
            status: FeeStatus::Paid,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        assert_eq!(fee.balance(), 0.0);
    }
}
