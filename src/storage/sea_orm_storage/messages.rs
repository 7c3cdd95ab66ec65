use super::SeaOrmStorage;
use crate::entity::messages::{ActiveModel, Column, Entity as Messages};
use crate::errors::{PortalError, Result};
use crate::models::{
    PaginationInfo,
    messages::{
        entities::Message,
        requests::{MessageListQuery, SendMessageRequest},
        responses::MessageListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 发送站内信
    pub async fn create_message_impl(
        &self,
        sender_id: i64,
        req: SendMessageRequest,
    ) -> Result<Message> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            sender_id: Set(sender_id),
            recipient_id: Set(req.recipient_id),
            subject: Set(req.subject),
            body: Set(req.body),
            read: Set(false),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("发送站内信失败: {e}")))?;

        Ok(result.into_message())
    }

    /// 通过 ID 获取站内信
    pub async fn get_message_by_id_impl(&self, id: i64) -> Result<Option<Message>> {
        let result = Messages::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询站内信失败: {e}")))?;

        Ok(result.map(|m| m.into_message()))
    }

    /// 分页列出站内信（收件箱或发件箱）
    pub async fn list_messages_with_pagination_impl(
        &self,
        query: MessageListQuery,
    ) -> Result<MessageListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Messages::find();

        if let Some(recipient_id) = query.recipient_id {
            select = select.filter(Column::RecipientId.eq(recipient_id));
        }

        if let Some(sender_id) = query.sender_id {
            select = select.filter(Column::SenderId.eq(sender_id));
        }

        if query.unread_only.unwrap_or(false) {
            select = select.filter(Column::Read.eq(false));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询站内信总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询站内信页数失败: {e}")))?;

        let messages = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询站内信列表失败: {e}")))?;

        Ok(MessageListResponse {
            items: messages.into_iter().map(|m| m.into_message()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 标记已读（只允许收件人操作）
    pub async fn mark_message_read_impl(&self, id: i64, recipient_id: i64) -> Result<bool> {
        let result = Messages::update_many()
            .col_expr(Column::Read, sea_orm::sea_query::Expr::value(true))
            .filter(Column::Id.eq(id))
            .filter(Column::RecipientId.eq(recipient_id))
            .exec(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("标记站内信已读失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
