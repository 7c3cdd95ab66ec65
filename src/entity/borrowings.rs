//! 借阅记录实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "borrowings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub book_id: i64,
    pub user_id: i64,
    pub borrowed_at: i64,
    pub due_at: i64,
    pub returned_at: Option<i64>,
    pub fine: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::books::Entity",
        from = "Column::BookId",
        to = "super::books::Column::Id"
    )]
    Book,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::books::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Book.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_borrowing(self) -> crate::models::library::entities::Borrowing {
        use chrono::{DateTime, Utc};

        crate::models::library::entities::Borrowing {
            id: self.id,
            book_id: self.book_id,
            user_id: self.user_id,
            borrowed_at: DateTime::<Utc>::from_timestamp(self.borrowed_at, 0).unwrap_or_default(),
            due_at: DateTime::<Utc>::from_timestamp(self.due_at, 0).unwrap_or_default(),
            returned_at: self
                .returned_at
                .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0)),
            fine: self.fine,
            book_title: None,
        }
    }
}
