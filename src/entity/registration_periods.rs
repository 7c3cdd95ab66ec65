//! 选课时间窗实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "registration_periods")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub session: String,
    pub starts_at: i64,
    pub ends_at: i64,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_period(self) -> crate::models::system::entities::RegistrationPeriod {
        use chrono::{DateTime, Utc};

        crate::models::system::entities::RegistrationPeriod {
            id: self.id,
            session: self.session,
            starts_at: DateTime::<Utc>::from_timestamp(self.starts_at, 0).unwrap_or_default(),
            ends_at: DateTime::<Utc>::from_timestamp(self.ends_at, 0).unwrap_or_default(),
            active: self.active,
        }
    }
}
