use super::SeaOrmStorage;
use crate::entity::fees::{ActiveModel, Column, Entity as Fees};
use crate::entity::payments::{
    ActiveModel as PaymentActiveModel, Column as PaymentColumn, Entity as Payments,
};
use crate::errors::{PortalError, Result};
use crate::models::{
    PaginationInfo,
    fees::{
        entities::{Fee, FeeStatus, Payment},
        requests::{CreateFeeRequest, FeeListQuery},
        responses::FeeListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建费用账单
    pub async fn create_fee_impl(&self, req: CreateFeeRequest) -> Result<Fee> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(req.student_id),
            description: Set(req.description),
            amount: Set(req.amount),
            paid: Set(0.0),
            session: Set(req.session),
            due_at: Set(req.due_at.map(|t| t.timestamp())),
            status: Set(FeeStatus::Pending.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("创建费用账单失败: {e}")))?;

        Ok(result.into_fee())
    }

    /// 通过 ID 获取费用账单
    pub async fn get_fee_by_id_impl(&self, id: i64) -> Result<Option<Fee>> {
        let result = Fees::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询费用账单失败: {e}")))?;

        Ok(result.map(|m| m.into_fee()))
    }

    /// 分页列出费用账单
    pub async fn list_fees_with_pagination_impl(
        &self,
        query: FeeListQuery,
    ) -> Result<FeeListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Fees::find();

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        if let Some(ref session) = query.session {
            select = select.filter(Column::Session.eq(session));
        }

        if let Some(ref status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询费用总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询费用页数失败: {e}")))?;

        let fees = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询费用列表失败: {e}")))?;

        Ok(FeeListResponse {
            items: fees.into_iter().map(|m| m.into_fee()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 缴费
    ///
    /// 校验余额、累加已缴、按新的已缴金额推导状态，缴费记录与账单
    /// 更新落在同一事务里。
    pub async fn apply_payment_impl(
        &self,
        fee_id: i64,
        amount: f64,
        method: String,
        reference: String,
    ) -> Result<(Payment, Fee)> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| PortalError::database_operation(format!("开启事务失败: {e}")))?;

        let fee = Fees::find_by_id(fee_id)
            .one(&txn)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询费用账单失败: {e}")))?
            .ok_or_else(|| PortalError::not_found("费用账单不存在"))?;

        let balance = (fee.amount - fee.paid).max(0.0);
        if amount > balance + f64::EPSILON {
            return Err(PortalError::validation(format!(
                "缴费金额超过剩余应缴金额: {balance:.2}"
            )));
        }

        let payment = PaymentActiveModel {
            fee_id: Set(fee_id),
            amount: Set(amount),
            method: Set(method),
            reference: Set(reference),
            paid_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| PortalError::database_operation(format!("写入缴费记录失败: {e}")))?;

        let new_paid = fee.paid + amount;
        let new_status = Fee::derive_status(fee.amount, new_paid);

        let updated_fee = ActiveModel {
            id: Set(fee_id),
            paid: Set(new_paid),
            status: Set(new_status.to_string()),
            updated_at: Set(now),
            ..Default::default()
        }
        .update(&txn)
        .await
        .map_err(|e| PortalError::database_operation(format!("更新费用账单失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| PortalError::database_operation(format!("提交事务失败: {e}")))?;

        Ok((payment.into_payment(), updated_fee.into_fee()))
    }

    /// 列出某账单的缴费记录
    pub async fn list_payments_impl(&self, fee_id: i64) -> Result<Vec<Payment>> {
        let payments = Payments::find()
            .filter(PaymentColumn::FeeId.eq(fee_id))
            .order_by_desc(PaymentColumn::PaidAt)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询缴费记录失败: {e}")))?;

        Ok(payments.into_iter().map(|m| m.into_payment()).collect())
    }
}
