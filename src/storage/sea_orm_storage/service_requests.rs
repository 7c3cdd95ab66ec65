use super::SeaOrmStorage;
use crate::entity::service_requests::{ActiveModel, Column, Entity as ServiceRequests};
use crate::errors::{PortalError, Result};
use crate::models::{
    PaginationInfo,
    requests::{
        entities::{RequestStatus, ServiceRequest},
        requests::{CreateServiceRequest, ServiceRequestListQuery},
        responses::ServiceRequestListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 提交自助申请
    pub async fn create_service_request_impl(
        &self,
        student_id: i64,
        req: CreateServiceRequest,
    ) -> Result<ServiceRequest> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(student_id),
            kind: Set(req.kind.to_string()),
            details: Set(req.details),
            status: Set(RequestStatus::Pending.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("提交申请失败: {e}")))?;

        Ok(result.into_request())
    }

    /// 通过 ID 获取申请
    pub async fn get_service_request_by_id_impl(&self, id: i64) -> Result<Option<ServiceRequest>> {
        let result = ServiceRequests::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询申请失败: {e}")))?;

        Ok(result.map(|m| m.into_request()))
    }

    /// 分页列出申请
    pub async fn list_service_requests_with_pagination_impl(
        &self,
        query: ServiceRequestListQuery,
    ) -> Result<ServiceRequestListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = ServiceRequests::find();

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        if let Some(ref kind) = query.kind {
            select = select.filter(Column::Kind.eq(kind.to_string()));
        }

        if let Some(ref status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询申请总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询申请页数失败: {e}")))?;

        let requests = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询申请列表失败: {e}")))?;

        Ok(ServiceRequestListResponse {
            items: requests.into_iter().map(|m| m.into_request()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 审批申请
    ///
    /// 仅 pending 状态可审批，已定案的申请返回冲突错误。
    pub async fn decide_service_request_impl(
        &self,
        id: i64,
        approve: bool,
        decided_by: i64,
        remark: Option<String>,
    ) -> Result<Option<ServiceRequest>> {
        let existing = match ServiceRequests::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询申请失败: {e}")))?
        {
            Some(m) => m,
            None => return Ok(None),
        };

        if existing.status != RequestStatus::Pending.to_string() {
            return Err(PortalError::conflict("该申请已定案，不能重复审批"));
        }

        let now = chrono::Utc::now().timestamp();
        let status = if approve {
            RequestStatus::Approved
        } else {
            RequestStatus::Rejected
        };

        let model = ActiveModel {
            id: Set(id),
            status: Set(status.to_string()),
            decided_by: Set(Some(decided_by)),
            decided_at: Set(Some(now)),
            remark: Set(remark),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("审批申请失败: {e}")))?;

        Ok(Some(result.into_request()))
    }
}
