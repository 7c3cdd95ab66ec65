use super::SeaOrmStorage;
use crate::entity::notifications::{ActiveModel, Column, Entity as Notifications};
use crate::errors::{PortalError, Result};
use crate::models::{
    PaginationInfo,
    notifications::{entities::NewNotification, responses::NotificationListResponse},
};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 批量写入通知（评分、审批等事件的 fan-out）
    pub async fn insert_notifications_impl(
        &self,
        notifications: Vec<NewNotification>,
    ) -> Result<u64> {
        if notifications.is_empty() {
            return Ok(0);
        }

        let now = chrono::Utc::now().timestamp();
        let count = notifications.len() as u64;

        let models: Vec<ActiveModel> = notifications
            .into_iter()
            .map(|n| ActiveModel {
                user_id: Set(n.user_id),
                title: Set(n.title),
                body: Set(n.body),
                kind: Set(n.kind),
                read: Set(false),
                created_at: Set(now),
                ..Default::default()
            })
            .collect();

        Notifications::insert_many(models)
            .exec(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("写入通知失败: {e}")))?;

        Ok(count)
    }

    /// 分页列出某用户的通知
    pub async fn list_notifications_with_pagination_impl(
        &self,
        user_id: i64,
        page: Option<i64>,
        size: Option<i64>,
        unread_only: bool,
    ) -> Result<NotificationListResponse> {
        let page = page.unwrap_or(1).max(1) as u64;
        let size = size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Notifications::find().filter(Column::UserId.eq(user_id));

        if unread_only {
            select = select.filter(Column::Read.eq(false));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询通知总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询通知页数失败: {e}")))?;

        let notifications = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询通知列表失败: {e}")))?;

        Ok(NotificationListResponse {
            items: notifications
                .into_iter()
                .map(|m| m.into_notification())
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 标记单条通知已读（只允许本人操作）
    pub async fn mark_notification_read_impl(&self, id: i64, user_id: i64) -> Result<bool> {
        let result = Notifications::update_many()
            .col_expr(Column::Read, sea_orm::sea_query::Expr::value(true))
            .filter(Column::Id.eq(id))
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("标记通知已读失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 全部标记已读，返回受影响条数
    pub async fn mark_all_notifications_read_impl(&self, user_id: i64) -> Result<u64> {
        let result = Notifications::update_many()
            .col_expr(Column::Read, sea_orm::sea_query::Expr::value(true))
            .filter(Column::UserId.eq(user_id))
            .filter(Column::Read.eq(false))
            .exec(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("标记全部已读失败: {e}")))?;

        Ok(result.rows_affected)
    }

    /// 未读数量
    pub async fn count_unread_notifications_impl(&self, user_id: i64) -> Result<i64> {
        let count = Notifications::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::Read.eq(false))
            .count(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("统计未读通知失败: {e}")))?;

        Ok(count as i64)
    }
}
