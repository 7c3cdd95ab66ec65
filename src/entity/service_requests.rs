//! 自助申请实体（证明 / 清关 / 补卡）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "service_requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub kind: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub details: Option<String>,
    pub status: String,
    pub decided_by: Option<i64>,
    pub decided_at: Option<i64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub remark: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::StudentId",
        to = "super::users::Column::Id"
    )]
    Student,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_request(self) -> crate::models::requests::entities::ServiceRequest {
        use crate::models::requests::entities::{RequestKind, RequestStatus, ServiceRequest};
        use chrono::{DateTime, Utc};

        ServiceRequest {
            id: self.id,
            student_id: self.student_id,
            kind: self
                .kind
                .parse::<RequestKind>()
                .unwrap_or(RequestKind::Certificate),
            details: self.details,
            status: self
                .status
                .parse::<RequestStatus>()
                .unwrap_or(RequestStatus::Pending),
            decided_by: self.decided_by,
            decided_at: self
                .decided_at
                .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0)),
            remark: self.remark,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
