use super::SeaOrmStorage;
use crate::entity::applications::{ActiveModel, Column, Entity as Applications};
use crate::errors::{PortalError, Result};
use crate::models::{
    PaginationInfo,
    applications::{
        entities::{Application, ApplicationStatus},
        requests::{ApplicationListQuery, CreateApplicationRequest},
        responses::ApplicationListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 提交入学申请（公开接口）
    pub async fn create_application_impl(
        &self,
        req: CreateApplicationRequest,
    ) -> Result<Application> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            applicant_name: Set(req.applicant_name),
            email: Set(req.email),
            program: Set(req.program),
            documents: Set(req.documents),
            status: Set(ApplicationStatus::Pending.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("提交入学申请失败: {e}")))?;

        Ok(result.into_application())
    }

    /// 通过 ID 获取入学申请
    pub async fn get_application_by_id_impl(&self, id: i64) -> Result<Option<Application>> {
        let result = Applications::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询入学申请失败: {e}")))?;

        Ok(result.map(|m| m.into_application()))
    }

    /// 分页列出入学申请
    pub async fn list_applications_with_pagination_impl(
        &self,
        query: ApplicationListQuery,
    ) -> Result<ApplicationListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Applications::find();

        if let Some(ref status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        if let Some(ref program) = query.program {
            select = select.filter(Column::Program.eq(program));
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

        let applications = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询申请列表失败: {e}")))?;

        Ok(ApplicationListResponse {
            items: applications
                .into_iter()
                .map(|m| m.into_application())
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 审核入学申请
    ///
    /// 仅 pending 状态可审核。
    pub async fn review_application_impl(
        &self,
        id: i64,
        admit: bool,
        reviewed_by: i64,
    ) -> Result<Option<Application>> {
        let existing = match Applications::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询入学申请失败: {e}")))?
        {
            Some(m) => m,
            None => return Ok(None),
        };

        if existing.status != ApplicationStatus::Pending.to_string() {
            return Err(PortalError::conflict("该申请已审核，不能重复操作"));
        }

        let now = chrono::Utc::now().timestamp();
        let status = if admit {
            ApplicationStatus::Admitted
        } else {
            ApplicationStatus::Rejected
        };

        let model = ActiveModel {
            id: Set(id),
            status: Set(status.to_string()),
            reviewed_by: Set(Some(reviewed_by)),
            reviewed_at: Set(Some(now)),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("审核入学申请失败: {e}")))?;

        Ok(Some(result.into_application()))
    }
}
