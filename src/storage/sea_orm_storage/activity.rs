use super::SeaOrmStorage;
use crate::entity::activity_logs::{ActiveModel, Column, Entity as ActivityLogs};
use crate::errors::{PortalError, Result};
use crate::models::{
    PaginationInfo,
    activity::{
        entities::{ActivityLog, NewActivityLog},
        requests::ActivityLogListQuery,
        responses::ActivityLogListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 写入操作日志
    pub async fn insert_activity_log_impl(&self, log: NewActivityLog) -> Result<ActivityLog> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            user_id: Set(log.user_id),
            action: Set(log.action),
            target: Set(log.target),
            detail: Set(log.detail),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("写入操作日志失败: {e}")))?;

        Ok(result.into_log())
    }

    /// 分页列出操作日志
    pub async fn list_activity_logs_with_pagination_impl(
        &self,
        query: ActivityLogListQuery,
    ) -> Result<ActivityLogListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = ActivityLogs::find();

        if let Some(user_id) = query.user_id {
            select = select.filter(Column::UserId.eq(user_id));
        }

        if let Some(ref action) = query.action {
            select = select.filter(Column::Action.eq(action));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询日志总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询日志页数失败: {e}")))?;

        let logs = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询日志列表失败: {e}")))?;

        Ok(ActivityLogListResponse {
            items: logs.into_iter().map(|m| m.into_log()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }
}
