use super::SeaOrmStorage;
use crate::entity::announcements::{ActiveModel, Column, Entity as Announcements};
use crate::entity::notifications::ActiveModel as NotificationActiveModel;
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{PortalError, Result};
use crate::models::{
    PaginationInfo,
    announcements::{
        entities::Announcement, requests::AnnouncementListQuery,
        responses::AnnouncementListResponse,
    },
    users::entities::UserStatus,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 发布公告并向接收者扇出通知，同一事务
    ///
    /// 返回公告本体与实际写入的通知条数。
    pub async fn create_announcement_impl(
        &self,
        author_id: i64,
        course_id: Option<i64>,
        title: String,
        body: String,
        recipients: Vec<i64>,
    ) -> Result<(Announcement, u64)> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| PortalError::database_operation(format!("开启事务失败: {e}")))?;

        let announcement = ActiveModel {
            author_id: Set(author_id),
            course_id: Set(course_id),
            title: Set(title.clone()),
            body: Set(body.clone()),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| PortalError::database_operation(format!("发布公告失败: {e}")))?;

        // 作者本人不重复收通知
        let mut notified = 0u64;
        let models: Vec<NotificationActiveModel> = recipients
            .into_iter()
            .filter(|id| *id != author_id)
            .map(|user_id| NotificationActiveModel {
                user_id: Set(user_id),
                title: Set(title.clone()),
                body: Set(body.clone()),
                kind: Set("announcement".to_string()),
                read: Set(false),
                created_at: Set(now),
                ..Default::default()
            })
            .collect();

        if !models.is_empty() {
            notified = models.len() as u64;
            crate::entity::notifications::Entity::insert_many(models)
                .exec(&txn)
                .await
                .map_err(|e| PortalError::database_operation(format!("写入通知失败: {e}")))?;
        }

        txn.commit()
            .await
            .map_err(|e| PortalError::database_operation(format!("提交事务失败: {e}")))?;

        Ok((announcement.into_announcement(), notified))
    }

    /// 分页列出公告
    ///
    /// course_ids 限定可见范围：全局公告加这些课程的公告。
    pub async fn list_announcements_with_pagination_impl(
        &self,
        query: AnnouncementListQuery,
    ) -> Result<AnnouncementListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Announcements::find();

        if let Some(course_id) = query.course_id {
            select = select.filter(Column::CourseId.eq(course_id));
        } else if let Some(ref course_ids) = query.course_ids {
            select = select.filter(
                Condition::any()
                    .add(Column::CourseId.is_null())
                    .add(Column::CourseId.is_in(course_ids.clone())),
            );
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询公告总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询公告页数失败: {e}")))?;

        let announcements = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询公告列表失败: {e}")))?;

        Ok(AnnouncementListResponse {
            items: announcements
                .into_iter()
                .map(|m| m.into_announcement())
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 活跃用户 ID 列表（全局公告的接收者）
    pub async fn list_active_user_ids_impl(&self) -> Result<Vec<i64>> {
        let ids: Vec<i64> = Users::find()
            .select_only()
            .column(UserColumn::Id)
            .filter(UserColumn::Status.eq(UserStatus::Active.to_string()))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询活跃用户失败: {e}")))?;

        Ok(ids)
    }
}
